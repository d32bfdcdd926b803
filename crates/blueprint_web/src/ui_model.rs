//! Pieces of the frontend that don't need a browser.
//!
//! Kept out of the wasm-only `web` module so they can be unit-tested on the
//! host.

use blueprint_ui::animation::css_alpha;
use blueprint_ui::config::ConsoleConfig;
use blueprint_ui::console::Console;
use blueprint_ui::surfaces::{HistoryEntry, HistoryLog, ResultGrid, StatusPanel, ThoughtBubble};

/// Id of the optional `<script type="application/json">` element carrying a
/// config override.
pub const CONFIG_ELEMENT_ID: &str = "blueprint-config";

/// Browser console method a log line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Warn,
    Error,
}

impl ConsoleLevel {
    pub fn for_level(level: &tracing::Level) -> Self {
        if *level == tracing::Level::ERROR {
            ConsoleLevel::Error
        } else if *level == tracing::Level::WARN {
            ConsoleLevel::Warn
        } else {
            ConsoleLevel::Log
        }
    }
}

/// Inline style value for the thought bubble's opacity.
pub fn opacity_style(opacity: f32) -> String {
    css_alpha(f64::from(opacity))
}

/// Resolve the console config from the inline element's text, if any.
///
/// A missing or blank element means defaults. A malformed one is reported
/// alongside the defaults so the caller can log it.
pub fn config_from_inline(raw: Option<&str>) -> (ConsoleConfig, Option<String>) {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return (ConsoleConfig::default(), None);
    };
    match ConsoleConfig::from_json(raw) {
        Ok(cfg) => (cfg, None),
        Err(e) => (ConsoleConfig::default(), Some(e.to_string())),
    }
}

/// Which surfaces a console update touched. Each one has its own signal in
/// the view, so only the touched ones are republished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceChanges {
    pub clock: bool,
    pub status: bool,
    pub thought: bool,
    pub results: bool,
    pub history: bool,
}

impl SurfaceChanges {
    pub fn any(&self) -> bool {
        self.clock || self.status || self.thought || self.results || self.history
    }
}

/// What the surfaces looked like before an update.
///
/// History is marked by its newest entry and length; it is never cloned.
#[derive(Debug, Clone)]
pub struct SurfaceMarks {
    clock: String,
    status: StatusPanel,
    thought: ThoughtBubble,
    results: ResultGrid,
    history_head: Option<u64>,
    history_len: usize,
}

impl SurfaceMarks {
    pub fn of(console: &Console) -> Self {
        Self {
            clock: console.clock().to_string(),
            status: *console.status(),
            thought: console.thought().clone(),
            results: console.results().clone(),
            history_head: console.history().latest().map(|e| e.seq),
            history_len: console.history().len(),
        }
    }

    pub fn changes(&self, console: &Console) -> SurfaceChanges {
        SurfaceChanges {
            clock: self.clock != console.clock(),
            status: self.status != *console.status(),
            thought: self.thought != *console.thought(),
            results: self.results != *console.results(),
            history: self.history_head != console.history().latest().map(|e| e.seq)
                || self.history_len != console.history().len(),
        }
    }
}

/// Entries recorded after `known_head`, newest first.
pub fn fresh_history(log: &HistoryLog, known_head: Option<u64>) -> Vec<HistoryEntry> {
    log.iter()
        .take_while(|e| Some(e.seq) != known_head)
        .cloned()
        .collect()
}
