//! The console state machine.
//!
//! [`Console`] owns every surface and is the only thing that mutates them.
//! Three kinds of input drive it, each handled to completion before the next:
//!
//! - transport events ([`Console::on_transport`]),
//! - decoded messages ([`Console::dispatch`]),
//! - timers it scheduled earlier through its [`Host`] ([`Console::on_timer`]).
//!
//! Timers are fire-and-forget. A thought shown at t=0 and another at t=3s
//! leave two hide timers in flight, and the first one hides the second
//! thought at t=5s. That race is part of the observable behaviour.

use tracing::{debug, info, warn};

use crate::config::ConsoleConfig;
use crate::protocol::{decode_frame, Frame, InboundMessage, ResultItem};
use crate::surfaces::{HistoryLog, ResultGrid, StatusPanel, ThoughtBubble};
use crate::timers::{Host, Timer};

#[derive(Debug, Clone, Copy)]
pub enum TransportEvent<'a> {
    Opened,
    Frame(Frame<'a>),
    Error,
    Closed,
}

/// Inbound traffic counters, for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub decoded: u64,
    /// Frames that failed to decode and were dropped.
    pub dropped: u64,
    /// Well-formed messages with a `type` nobody handles.
    pub ignored: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Console {
    config: ConsoleConfig,
    thought: ThoughtBubble,
    results: ResultGrid,
    history: HistoryLog,
    status: StatusPanel,
    clock: String,
    stats: FrameStats,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}

impl Console {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config,
            thought: ThoughtBubble::default(),
            results: ResultGrid::default(),
            history: HistoryLog::default(),
            status: StatusPanel::default(),
            clock: String::new(),
            stats: FrameStats::default(),
        }
    }

    /// Paint the clock and start its periodic refresh.
    pub fn start(&mut self, host: &mut impl Host) {
        self.clock = host.local_time();
        host.schedule(self.config.clock_interval(), Timer::ClockTick);
    }

    pub fn on_transport(&mut self, event: TransportEvent<'_>, host: &mut impl Host) {
        match event {
            TransportEvent::Opened => {
                info!(endpoint = %self.config.endpoint, "transport connected");
                self.update_status("connected");
                self.status.transport_opened();
            }
            TransportEvent::Frame(frame) => match decode_frame(frame) {
                Ok(msg) => {
                    self.stats.decoded += 1;
                    self.dispatch(msg, host);
                }
                Err(e) => {
                    self.stats.dropped += 1;
                    warn!(error = %e, dropped = self.stats.dropped, "dropping inbound frame");
                }
            },
            TransportEvent::Error => {
                warn!("transport error; console is now disconnected");
                self.status.transport_lost();
            }
            TransportEvent::Closed => {
                info!("transport closed; console is now disconnected");
                self.status.transport_lost();
            }
        }
    }

    /// Route one message to the handler owning its surface.
    pub fn dispatch(&mut self, msg: InboundMessage, host: &mut impl Host) {
        match msg {
            InboundMessage::Thought { content } => self.show_thought(content, host),
            InboundMessage::Result { content } => self.show_results(content, host),
            InboundMessage::Status { status } => {
                self.update_status(&status);
            }
            InboundMessage::Command { command, response } => {
                self.add_to_history(command, response, host)
            }
            InboundMessage::Unknown => {
                self.stats.ignored += 1;
                debug!("ignoring message with unknown type");
            }
        }
    }

    pub fn show_thought(&mut self, text: String, host: &mut impl Host) {
        self.thought.show(text);
        host.schedule(self.config.fade_interval(), Timer::ThoughtFade { step: 1 });
        host.schedule(self.config.thought_ttl(), Timer::HideThought);
    }

    pub fn show_results(&mut self, items: Vec<ResultItem>, host: &mut impl Host) {
        debug!(cards = items.len(), "showing results");
        self.results.replace(items);
        host.schedule(self.config.result_ttl(), Timer::HideResults);
    }

    pub fn add_to_history(
        &mut self,
        command: String,
        response: Option<String>,
        host: &mut impl Host,
    ) {
        let timestamp = host.local_time();
        self.history.record(command, response, timestamp);
    }

    /// Returns whether the token was recognized; unknown tokens are a no-op.
    pub fn update_status(&mut self, token: &str) -> bool {
        let known = self.status.apply_token(token);
        if !known {
            debug!(token, "ignoring unknown status token");
        }
        known
    }

    pub fn on_timer(&mut self, timer: Timer, host: &mut impl Host) {
        match timer {
            Timer::ThoughtFade { step } => {
                let steps = self.config.fade_steps;
                self.thought.fade_step(step, steps);
                if step < steps {
                    host.schedule(
                        self.config.fade_interval(),
                        Timer::ThoughtFade { step: step + 1 },
                    );
                }
            }
            Timer::HideThought => self.thought.hide(),
            Timer::HideResults => self.results.hide(),
            Timer::ClockTick => {
                self.clock = host.local_time();
                host.schedule(self.config.clock_interval(), Timer::ClockTick);
            }
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn thought(&self) -> &ThoughtBubble {
        &self.thought
    }

    pub fn results(&self) -> &ResultGrid {
        &self.results
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn status(&self) -> &StatusPanel {
        &self.status
    }

    pub fn clock(&self) -> &str {
        &self.clock
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}
