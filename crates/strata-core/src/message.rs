//! The append-only diagnostic log accumulated during case assembly.

/// Severity of a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Informational; processing was not affected.
    Info,
    /// Likely input mistake; processing continued.
    Warning,
}

/// A single diagnostic: severity plus free-text body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Severity tag.
    pub severity: Severity,
    /// Human-readable body.
    pub text: String,
}

/// Ordered, append-only collection of diagnostics.
///
/// The log performs no deduplication and no severity filtering; draining
/// belongs to the reporting layer that owns the containing component.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an informational message.
    pub fn info(&mut self, text: impl Into<String>) {
        self.messages.push(Message {
            severity: Severity::Info,
            text: text.into(),
        });
    }

    /// Append a warning.
    pub fn warning(&mut self, text: impl Into<String>) {
        self.messages.push(Message {
            severity: Severity::Warning,
            text: text.into(),
        });
    }

    /// Append a pre-built message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Number of accumulated messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over messages in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Remove and yield all messages in append order.
    pub fn drain(&mut self) -> impl Iterator<Item = Message> + '_ {
        self.messages.drain(..)
    }
}
