//! Console configuration.
//!
//! Every tunable the console uses lives here. `ConsoleConfig::default()` is the
//! compiled-in behaviour; a host may overlay a (partial) JSON object on top of
//! it with [`ConsoleConfig::from_json`].

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Rgba;
use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "ws://localhost:8765";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// WebSocket endpoint the console connects to once at startup.
    pub endpoint: String,
    /// How long a thought stays up after the message that showed it.
    pub thought_ttl_ms: u64,
    /// How long the result grid stays up after the message that filled it.
    pub result_ttl_ms: u64,
    pub fade_steps: u8,
    pub fade_interval_ms: u64,
    pub clock_interval_ms: u64,
    /// Fixed canvas height; the width follows the container.
    pub canvas_height: u32,
    pub animation: AnimationConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            thought_ttl_ms: 5_000,
            result_ttl_ms: 10_000,
            fade_steps: 10,
            fade_interval_ms: 50,
            clock_interval_ms: 1_000,
            canvas_height: 400,
            animation: AnimationConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a JSON object and overlay it on the defaults.
    ///
    /// Missing fields keep their default value; the result is validated.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: ConsoleConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("ws://") || self.endpoint.starts_with("wss://")) {
            return Err(ConfigError::Invalid {
                field: "endpoint",
                reason: format!("expected a ws:// or wss:// url, got {:?}", self.endpoint),
            });
        }
        if self.fade_steps == 0 {
            return Err(ConfigError::Invalid {
                field: "fade_steps",
                reason: "must be at least 1".to_string(),
            });
        }
        for (field, value) in [
            ("fade_interval_ms", self.fade_interval_ms),
            ("clock_interval_ms", self.clock_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be non-zero".to_string(),
                });
            }
        }
        if self.canvas_height == 0 {
            return Err(ConfigError::Invalid {
                field: "canvas_height",
                reason: "must be non-zero".to_string(),
            });
        }
        self.animation.validate()
    }

    pub fn thought_ttl(&self) -> Duration {
        Duration::from_millis(self.thought_ttl_ms)
    }

    pub fn result_ttl(&self) -> Duration {
        Duration::from_millis(self.result_ttl_ms)
    }

    pub fn fade_interval(&self) -> Duration {
        Duration::from_millis(self.fade_interval_ms)
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }
}

/// Ambient background and node-graph parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Added to the animation clock once per frame, independent of wall time.
    pub time_step: f64,
    /// Peak node displacement in canvas units.
    pub amplitude: f64,
    pub node_radius: f64,
    pub glow_radius: f64,
    pub link_width: f64,
    pub gradient_inner: Rgba,
    pub gradient_outer: Rgba,
    pub link_color: Rgba,
    pub node_color: Rgba,
    pub glow_color: Rgba,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.016,
            amplitude: 10.0,
            node_radius: 4.0,
            glow_radius: 8.0,
            link_width: 1.0,
            gradient_inner: Rgba::new(0, 255, 136, 0.03),
            gradient_outer: Rgba::new(0, 0, 0, 0.0),
            link_color: Rgba::new(0, 255, 136, 0.1),
            node_color: Rgba::new(0, 255, 136, 1.0),
            glow_color: Rgba::new(0, 255, 136, 0.2),
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::Invalid {
                field: "animation.time_step",
                reason: "must be a positive number".to_string(),
            });
        }
        if !(self.amplitude.is_finite() && self.node_radius > 0.0 && self.glow_radius > 0.0) {
            return Err(ConfigError::Invalid {
                field: "animation",
                reason: "amplitude must be finite and radii positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_compiled_constants() {
        let cfg = ConsoleConfig::default();
        assert_eq!(cfg.endpoint, "ws://localhost:8765");
        assert_eq!(cfg.thought_ttl(), Duration::from_secs(5));
        assert_eq!(cfg.result_ttl(), Duration::from_secs(10));
        assert_eq!(cfg.fade_steps, 10);
        assert_eq!(cfg.fade_interval(), Duration::from_millis(50));
        assert_eq!(cfg.canvas_height, 400);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let cfg = ConsoleConfig::from_json(
            r#"{ "endpoint": "wss://example.test/ws", "animation": { "amplitude": 4.0 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.endpoint, "wss://example.test/ws");
        assert_eq!(cfg.animation.amplitude, 4.0);
        assert_eq!(cfg.animation.time_step, 0.016);
        assert_eq!(cfg.thought_ttl_ms, 5_000);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = ConsoleConfig::from_json(r#"{ "endpoint": "http://localhost" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "endpoint", .. }));

        let err = ConsoleConfig::from_json(r#"{ "fade_steps": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fade_steps", .. }));

        let err = ConsoleConfig::from_json(r#"{ "animation": { "time_step": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "animation.time_step", .. }));

        assert!(matches!(
            ConsoleConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
