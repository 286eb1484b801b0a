use serde::Serialize;
use tokio::sync::broadcast;

/// Events that flow from brick validations to SSE subscribers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum Event {
    /// A brick passed every check and was stamped with its volume id.
    BrickAccepted {
        host: String,
        path: String,
        forced: bool,
        /// RFC 3339 timestamp of the verdict.
        at: String,
    },

    /// A brick was refused.
    BrickRejected {
        host: String,
        path: String,
        /// Stable error kind, e.g. `brick_is_mount_point`.
        code: String,
        message: String,
        at: String,
    },

    /// A generic error event.
    DaemonError { message: String },
}

impl Event {
    /// Returns the SSE event type name for this event variant.
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::BrickAccepted { .. } => "brick_accepted",
            Self::BrickRejected { .. } => "brick_rejected",
            Self::DaemonError { .. } => "daemon_error",
        }
    }
}

/// The central event broadcast hub.
///
/// Validation handlers send events here via `publish()`.
/// The SSE endpoint subscribes via `subscribe()` and forwards events to clients.
#[derive(Debug, Clone)]
pub struct EventHub {
    sender: broadcast::Sender<Event>,
}

impl EventHub {
    /// Create a new EventHub with the given channel capacity.
    ///
    /// Subscribers that fall more than `capacity` events behind receive a
    /// `Lagged` error and miss intermediate events.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Returns Ok(subscriber_count) or Err if there are no active subscribers
    /// (events are fire-and-forget).
    pub fn publish(&self, event: Event) -> Result<usize, broadcast::error::SendError<Event>> {
        self.sender.send(event)
    }

    /// Subscribe to the event stream. Returns a broadcast Receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}
