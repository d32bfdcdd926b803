/// The thought bubble: one line of "what the assistant is thinking".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThoughtBubble {
    visible: bool,
    text: String,
    opacity: f32,
}

impl ThoughtBubble {
    /// Show `text` and restart the fade from fully transparent.
    pub fn show(&mut self, text: String) {
        self.visible = true;
        self.text = text;
        self.opacity = 0.0;
    }

    pub fn fade_step(&mut self, step: u8, steps: u8) {
        let steps = steps.max(1);
        self.opacity = (step.min(steps) as f32) / (steps as f32);
    }

    /// Hides the bubble. The text stays so a late fade tick has something to
    /// fade, exactly like the DOM node it mirrors.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}
