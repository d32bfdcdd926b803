//! Inbound wire protocol.
//!
//! One JSON object per frame, tagged by `type`:
//!
//! ```text
//! { "type": "thought",  "content": "..." }
//! { "type": "result",   "content": [ { "title": "...", "subtitle": "..." } ] }
//! { "type": "status",   "status": "..." }
//! { "type": "command",  "command": "...", "response": "..." | null }
//! ```
//!
//! Unknown `type` values decode to [`InboundMessage::Unknown`] so the
//! dispatcher can ignore them without treating them as malformed.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InboundMessage {
    Thought {
        content: String,
    },
    Result {
        content: Vec<ResultItem>,
    },
    Status {
        status: String,
    },
    Command {
        command: String,
        #[serde(default)]
        response: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl InboundMessage {
    /// Wire discriminant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            InboundMessage::Thought { .. } => "thought",
            InboundMessage::Result { .. } => "result",
            InboundMessage::Status { .. } => "status",
            InboundMessage::Command { .. } => "command",
            InboundMessage::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub title: String,
    pub subtitle: String,
}

impl ResultItem {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Raw payload as delivered by the transport.
#[derive(Debug, Clone, Copy)]
pub enum Frame<'a> {
    Text(&'a str),
    Binary(&'a [u8]),
}

pub fn decode_frame(frame: Frame<'_>) -> Result<InboundMessage, DecodeError> {
    match frame {
        Frame::Text(text) => Ok(serde_json::from_str(text)?),
        Frame::Binary(bytes) => Err(DecodeError::Binary { len: bytes.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Result<InboundMessage, DecodeError> {
        decode_frame(Frame::Text(text))
    }

    #[test]
    fn decodes_each_message_kind() {
        assert_eq!(
            decode(r#"{"type":"thought","content":"Analyzing…"}"#).unwrap(),
            InboundMessage::Thought {
                content: "Analyzing…".to_string()
            }
        );

        assert_eq!(
            decode(r#"{"type":"result","content":[{"title":"A","subtitle":"x"},{"title":"B","subtitle":"y"}]}"#)
                .unwrap(),
            InboundMessage::Result {
                content: vec![ResultItem::new("A", "x"), ResultItem::new("B", "y")]
            }
        );

        assert_eq!(
            decode(r#"{"type":"status","status":"listening"}"#).unwrap(),
            InboundMessage::Status {
                status: "listening".to_string()
            }
        );

        assert_eq!(
            decode(r#"{"type":"command","command":"status","response":"ok"}"#).unwrap(),
            InboundMessage::Command {
                command: "status".to_string(),
                response: Some("ok".to_string())
            }
        );
    }

    #[test]
    fn null_or_missing_response_is_none() {
        for raw in [
            r#"{"type":"command","command":"ls","response":null}"#,
            r#"{"type":"command","command":"ls"}"#,
        ] {
            assert_eq!(
                decode(raw).unwrap(),
                InboundMessage::Command {
                    command: "ls".to_string(),
                    response: None
                }
            );
        }
    }

    #[test]
    fn unknown_type_is_not_an_error() {
        let msg = decode(r#"{"type":"telemetry","cpu":0.4}"#).unwrap();
        assert_eq!(msg, InboundMessage::Unknown);
        assert_eq!(msg.kind(), "unknown");
    }

    #[test]
    fn malformed_frames_are_errors() {
        assert!(matches!(decode("{not json"), Err(DecodeError::Json(_))));
        assert!(matches!(decode(r#"{"content":"no tag"}"#), Err(DecodeError::Json(_))));
        assert!(matches!(decode(r#"{"type":"thought"}"#), Err(DecodeError::Json(_))));
        assert!(matches!(
            decode(r#"{"type":"result","content":[{"title":"A"}]}"#),
            Err(DecodeError::Json(_))
        ));
        assert!(matches!(
            decode_frame(Frame::Binary(&[1, 2, 3])),
            Err(DecodeError::Binary { len: 3 })
        ));
    }

    #[test]
    fn empty_result_list_is_valid() {
        assert_eq!(
            decode(r#"{"type":"result","content":[]}"#).unwrap(),
            InboundMessage::Result { content: vec![] }
        );
    }
}
