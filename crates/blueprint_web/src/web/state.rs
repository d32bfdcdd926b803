use blueprint_ui::config::ConsoleConfig;
use blueprint_ui::console::Console;
use blueprint_ui::surfaces::{HistoryEntry, ResultGrid, StatusPanel, ThoughtBubble};
use leptos::prelude::*;

use super::host::BrowserHost;
use crate::ui_model::{fresh_history, SurfaceChanges, SurfaceMarks};

/// The console plus one signal per surface.
///
/// The console itself is not reactive. Every mutation goes through
/// [`ConsoleHandle::apply`], which republishes only the surfaces it touched,
/// so a clock tick never re-renders the results or history.
#[derive(Clone, Copy)]
pub(super) struct ConsoleHandle {
    console: StoredValue<Console>,
    pub clock: RwSignal<String>,
    pub status: RwSignal<StatusPanel>,
    pub thought: RwSignal<ThoughtBubble>,
    pub results: RwSignal<ResultGrid>,
    /// Newest first; grows by prepending, never rebuilt.
    pub history: RwSignal<Vec<HistoryEntry>>,
}

impl ConsoleHandle {
    pub(super) fn new(config: ConsoleConfig) -> Self {
        let console = Console::new(config);
        Self {
            clock: RwSignal::new(console.clock().to_string()),
            status: RwSignal::new(*console.status()),
            thought: RwSignal::new(console.thought().clone()),
            results: RwSignal::new(console.results().clone()),
            history: RwSignal::new(Vec::new()),
            console: StoredValue::new(console),
        }
    }

    pub(super) fn config(&self) -> ConsoleConfig {
        self.console.with_value(|c| c.config().clone())
    }

    /// Run one handler against the console, then publish what changed.
    pub(super) fn apply(&self, f: impl FnOnce(&mut Console, &mut BrowserHost)) {
        let mut host = BrowserHost::new(*self);
        let mut changes = SurfaceChanges::default();
        self.console.update_value(|c| {
            let marks = SurfaceMarks::of(c);
            f(c, &mut host);
            changes = marks.changes(c);
        });
        if changes.any() {
            self.publish(changes);
        }
    }

    fn publish(&self, changes: SurfaceChanges) {
        self.console.with_value(|c| {
            if changes.clock {
                self.clock.set(c.clock().to_string());
            }
            if changes.status {
                self.status.set(*c.status());
            }
            if changes.thought {
                self.thought.set(c.thought().clone());
            }
            if changes.results {
                self.results.set(c.results().clone());
            }
            if changes.history {
                let head = self.history.with_untracked(|h| h.first().map(|e| e.seq));
                let fresh = fresh_history(c.history(), head);
                self.history.update(|h| {
                    h.splice(0..0, fresh);
                });
            }
        });
    }
}
