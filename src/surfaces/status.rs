/// Voice pipeline state as announced by `status` messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceStatus {
    Listening,
    Thinking,
    Connected,
}

impl VoiceStatus {
    /// Recognized status tokens. Anything else is not a voice status.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "listening" => Some(VoiceStatus::Listening),
            "thinking" => Some(VoiceStatus::Thinking),
            "connected" => Some(VoiceStatus::Connected),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VoiceStatus::Listening => "🎤 Listening...",
            VoiceStatus::Thinking => "🤔 Thinking",
            VoiceStatus::Connected => "🟢 Connected",
        }
    }
}

/// Transport connectivity. Only transport events move this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
}

impl ConnectionStatus {
    /// Token rendered as the `data-connection` attribute of the system
    /// indicator.
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connected => "connected",
        }
    }
}

/// The system indicator next to the clock. Latest trigger wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemIndicator {
    #[default]
    Disconnected,
    Ready,
    Processing,
}

impl SystemIndicator {
    pub fn label(self) -> &'static str {
        match self {
            SystemIndicator::Disconnected => "○ Disconnected",
            SystemIndicator::Ready => "● System Ready",
            SystemIndicator::Processing => "● Processing",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SystemIndicator::Disconnected => "status-error",
            SystemIndicator::Ready => "status-ok",
            SystemIndicator::Processing => "status-thinking",
        }
    }
}

pub const VOICE_IDLE_LABEL: &str = "⚪ Idle";

/// Both status indicators. They are deliberately not kept consistent with
/// each other: `voice` can read "Connected" while `connection` is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusPanel {
    voice: Option<VoiceStatus>,
    connection: ConnectionStatus,
    system: SystemIndicator,
}

impl StatusPanel {
    /// Apply a status token. Returns `false` (and changes nothing) when the
    /// token is not recognized.
    pub fn apply_token(&mut self, token: &str) -> bool {
        let Some(voice) = VoiceStatus::parse(token) else {
            return false;
        };
        self.voice = Some(voice);
        if voice == VoiceStatus::Thinking {
            self.system = SystemIndicator::Processing;
        }
        true
    }

    pub fn transport_opened(&mut self) {
        self.connection = ConnectionStatus::Connected;
        self.system = SystemIndicator::Ready;
    }

    pub fn transport_lost(&mut self) {
        self.connection = ConnectionStatus::Disconnected;
        self.system = SystemIndicator::Disconnected;
    }

    pub fn voice(&self) -> Option<VoiceStatus> {
        self.voice
    }

    pub fn voice_label(&self) -> &'static str {
        self.voice.map(VoiceStatus::label).unwrap_or(VOICE_IDLE_LABEL)
    }

    pub fn connection(&self) -> ConnectionStatus {
        self.connection
    }

    pub fn system(&self) -> SystemIndicator {
        self.system
    }
}
