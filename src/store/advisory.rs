use std::fmt;

/// A user-facing message about a request the store declined.
///
/// Advisories are not errors: the store state is simply left unchanged.
/// Each variant maps to a localized message key owned by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// Cannot move any further up.
    NoMoreUp,
    /// Cannot move any further down.
    NoMoreBottom,
    /// Generic refusal, e.g. attempting to remove or move the info block.
    Warning,
    /// Confirmation prompt shown before deleting a block; see
    /// [`DocumentStore::delete_confirmation`](super::DocumentStore::delete_confirmation).
    DeleteBlockTip,
}

impl Advisory {
    pub const ALL: [Advisory; 4] = [
        Advisory::NoMoreUp,
        Advisory::NoMoreBottom,
        Advisory::Warning,
        Advisory::DeleteBlockTip,
    ];

    /// Message key for the localization layer.
    pub fn key(self) -> &'static str {
        match self {
            Advisory::NoMoreUp => "noMoreUp",
            Advisory::NoMoreBottom => "noMoreBottom",
            Advisory::Warning => "warning",
            Advisory::DeleteBlockTip => "deleteBlockTip",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Receives advisories emitted by the document store.
pub trait Notifier {
    fn notify(&mut self, advisory: Advisory);
}

/// Forwards advisories to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, advisory: Advisory) {
        tracing::info!(advisory = advisory.key(), "Advisory");
    }
}

/// Keeps every advisory it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    advisories: Vec<Advisory>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    pub fn last(&self) -> Option<Advisory> {
        self.advisories.last().copied()
    }

    /// Drains the recorded advisories.
    pub fn take(&mut self) -> Vec<Advisory> {
        std::mem::take(&mut self.advisories)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, advisory: Advisory) {
        self.advisories.push(advisory);
    }
}
