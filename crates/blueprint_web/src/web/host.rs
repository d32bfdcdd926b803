use std::time::Duration;

use blueprint_ui::timers::{Host, Timer};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::state::ConsoleHandle;

/// Schedules console timers on `window.setTimeout` and reads the browser's
/// local clock.
#[derive(Clone, Copy)]
pub(super) struct BrowserHost {
    handle: ConsoleHandle,
}

impl BrowserHost {
    pub(super) fn new(handle: ConsoleHandle) -> Self {
        Self { handle }
    }
}

impl Host for BrowserHost {
    fn schedule(&mut self, after: Duration, timer: Timer) {
        let Some(window) = web_sys::window() else {
            warn!(?timer, "no window; timer dropped");
            return;
        };

        let handle = self.handle;
        let cb = Closure::once_into_js(move || {
            handle.apply(|c, host| c.on_timer(timer, host));
        });

        let ms = i32::try_from(after.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        {
            warn!(?timer, error = ?e, "setTimeout failed; timer dropped");
        }
    }

    fn local_time(&self) -> String {
        js_sys::Date::new_0()
            .to_locale_time_string("default")
            .into()
    }
}
