/// The repository's second demo: a message shown or hidden by one action.
#[derive(Debug, Clone)]
pub struct MessageToggle {
    message: String,
    visible: bool,
}

impl MessageToggle {
    /// Starts hidden.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            visible: false,
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> Option<&str> {
        self.visible.then_some(self.message.as_str())
    }
}
