//! The seam between the console and whatever actually keeps time.
//!
//! Handlers never touch a platform timer. They ask the [`Host`] to deliver a
//! [`Timer`] back to [`Console::on_timer`](crate::console::Console::on_timer)
//! after a delay. Scheduled timers are never cancelled: every one fires.

use core::time::Duration;

/// A deferred console action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// One tick of a thought fade-in; `step` counts from 1 up to the
    /// configured number of steps. Each `showThought` starts its own chain.
    ThoughtFade { step: u8 },
    HideThought,
    HideResults,
    ClockTick,
}

pub trait Host {
    fn schedule(&mut self, after: Duration, timer: Timer);

    /// Current wall-clock time, formatted for display in the user's locale.
    fn local_time(&self) -> String;
}
