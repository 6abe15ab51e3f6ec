//! Bridge pattern: notification kinds decoupled from delivery channels.
//!
//! A [`Notification`] (urgent or regular) decides how a message is framed;
//! the [`MessageSender`] it wraps decides where it goes. Either side can
//! grow without touching the other.

use crate::output::MessageSink;

/// Delivery channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageSender {
    /// Email delivery
    Email,
    /// SMS delivery
    Sms,
    /// Push notification delivery
    Push,
}

impl MessageSender {
    /// Delivers `message` to `recipient`.
    pub fn send(self, message: &str, recipient: &str, sink: &dyn MessageSink) {
        let line = match self {
            Self::Email => format!("Email to {recipient}: {message}"),
            Self::Sms => format!("SMS to {recipient}: {message}"),
            Self::Push => format!("Push notification to {recipient}: {message}"),
        };
        tracing::trace!(channel = ?self, recipient, "message sent");
        sink.emit(&line);
    }
}

/// Notification abstraction over a [`MessageSender`].
///
/// # Examples
///
/// ```
/// use design_patterns::bridge::{MessageSender, Notification};
/// use design_patterns::output::RecordingSink;
///
/// let sink = RecordingSink::new();
/// Notification::Urgent(MessageSender::Email).notify("Server is down!", "ops@example.com", &sink);
///
/// assert_eq!(
///     sink.lines(),
///     vec!["[URGENT]", "Email to ops@example.com: ⚠️ Server is down!"]
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notification {
    /// Flagged as urgent
    Urgent(MessageSender),
    /// Informational
    Regular(MessageSender),
}

impl Notification {
    /// Frames `message` according to the notification kind and sends it.
    pub fn notify(self, message: &str, recipient: &str, sink: &dyn MessageSink) {
        let (banner, sender, framed) = match self {
            Self::Urgent(sender) => ("[URGENT]", sender, format!("⚠️ {message}")),
            Self::Regular(sender) => ("[INFO]", sender, format!("ℹ️ {message}")),
        };
        sink.emit(banner);
        sender.send(&framed, recipient, sink);
    }

    /// The wrapped delivery channel.
    #[must_use]
    pub const fn sender(self) -> MessageSender {
        match self {
            Self::Urgent(sender) | Self::Regular(sender) => sender,
        }
    }
}
