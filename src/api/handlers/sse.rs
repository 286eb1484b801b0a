use crate::events::Event;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::sse::{Event as SseEvent, KeepAlive, Sse},
};
use futures::stream::Stream;
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

#[derive(Debug, Deserialize)]
pub(crate) struct EventFilter {
    /// Only forward events of this type, e.g. `brick_rejected`.
    pub only: Option<String>,
}

fn to_sse(event: &Event) -> Option<SseEvent> {
    let json = serde_json::to_string(event).ok()?;
    Some(SseEvent::default().event(event.event_type()).data(json))
}

pub(crate) async fn sse_events(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<EventFilter>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = state.event_hub.subscribe();

    // Lagged receivers just skip what they missed.
    let stream = BroadcastStream::new(rx).filter_map(move |result| {
        let event = result.ok()?;
        if filter.only.as_deref().is_some_and(|only| only != event.event_type()) {
            return None;
        }
        to_sse(&event).map(Ok)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
