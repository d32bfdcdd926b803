//! # blueprint_ui
//!
//! Presentation state machine for the Blueprint visual console.
//!
//! The console shows what an external assistant process is doing: a fading
//! thought bubble, a grid of result cards, a newest-first command history and
//! a pair of status indicators, all driven by JSON messages arriving over a
//! socket. Behind it, an ambient node graph animates on its own.
//!
//! This crate has no browser dependency. Time and timers reach it through the
//! [`timers::Host`] trait, and drawing leaves it as a list of
//! [`animation::DrawOp`]s, so the whole thing runs (and is tested) natively.
//! The `blueprint_web` crate binds it to the DOM.
//!
//! ```
//! use blueprint_ui::prelude::*;
//!
//! let mut console = Console::default();
//! let mut host = VirtualHost::new();
//!
//! console.on_transport(TransportEvent::Opened, &mut host);
//! console.on_transport(
//!     TransportEvent::Frame(Frame::Text(r#"{"type":"thought","content":"hmm"}"#)),
//!     &mut host,
//! );
//! assert!(console.thought().visible());
//!
//! host.advance_ms(5_000, &mut console);
//! assert!(!console.thought().visible());
//! ```
//!
//! ## Modules
//!
//! - [`protocol`]: inbound message schema and frame decoding
//! - [`console`]: the dispatcher and its surfaces
//! - [`surfaces`]: per-surface state
//! - [`timers`]: the timer/clock seam
//! - [`animation`]: node geometry and frame planning
//! - [`sim`]: deterministic virtual-time host

pub mod animation;
pub mod config;
pub mod console;
pub mod error;
pub mod protocol;
pub mod sim;
pub mod surfaces;
pub mod timers;

pub mod prelude {
    pub use crate::animation::{CanvasSize, DrawOp, FrameClock, FramePlanner, Point, Rgba};
    pub use crate::config::{AnimationConfig, ConsoleConfig};
    pub use crate::console::{Console, FrameStats, TransportEvent};
    pub use crate::error::{ConfigError, DecodeError, StartupError};
    pub use crate::protocol::{decode_frame, Frame, InboundMessage, ResultItem};
    pub use crate::sim::VirtualHost;
    pub use crate::surfaces::{ConnectionStatus, SystemIndicator, VoiceStatus};
    pub use crate::timers::{Host, Timer};
}
