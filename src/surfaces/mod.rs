//! Presentation surfaces. Each is plain state, mutated only by its handler in
//! [`Console`](crate::console::Console).

mod history;
mod results;
mod status;
mod thought;

pub use history::{HistoryEntry, HistoryLog};
pub use results::ResultGrid;
pub use status::{ConnectionStatus, StatusPanel, SystemIndicator, VoiceStatus, VOICE_IDLE_LABEL};
pub use thought::ThoughtBubble;
