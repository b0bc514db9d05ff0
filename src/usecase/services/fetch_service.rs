use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::view_state::ViewState;
use crate::usecase::ports::api::{EnvelopeKind, FetchDescriptor, FetchError, RegistryApi};

/// Identifies one request issued through a [`RequestTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter for the requests of one view.
///
/// Only the most recent ticket may commit. Cancelling (on unmount) makes
/// every outstanding ticket stale for good.
#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: AtomicU64,
    closed: AtomicBool,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.closed.load(Ordering::SeqCst) && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub fn cancel(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Filter pairs first, then endpoint defaults the filters did not set.
pub fn build_query(descriptor: &FetchDescriptor, filters: &FilterSelection) -> Vec<(String, String)> {
    let mut query = filters.to_query_pairs();
    for (name, value) in descriptor.defaults {
        if !query.iter().any(|(existing, _)| existing == name) {
            query.push((name.to_string(), value.to_string()));
        }
    }
    query
}

/// Pulls the payload out of the endpoint's envelope.
pub fn extract_envelope(kind: EnvelopeKind, body: Value) -> Result<Value, FetchError> {
    let Value::Object(mut body) = body else {
        return Err(FetchError::Shape("body is not a JSON object".to_string()));
    };

    let key = match kind {
        EnvelopeKind::Data => "data",
        EnvelopeKind::Chart => "chart",
        EnvelopeKind::Metrics => {
            if !body.contains_key("metrics") && !body.contains_key("meta") {
                return Err(FetchError::Shape(
                    "expected `metrics` or `meta` at top level".to_string(),
                ));
            }
            return Ok(Value::Object(body));
        }
    };

    match body.remove(key) {
        Some(Value::Null) => Ok(Value::Object(Map::new())),
        Some(payload) => Ok(payload),
        None => Err(FetchError::Shape(format!("missing `{key}` field"))),
    }
}

pub async fn fetch_payload<T>(
    api: &dyn RegistryApi,
    descriptor: &FetchDescriptor,
    filters: &FilterSelection,
) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    let query = build_query(descriptor, filters);
    debug!(path = descriptor.path, ?query, "fetching");
    let body = api.get_json(descriptor.path, &query).await?;
    let payload = extract_envelope(descriptor.envelope, body)?;
    Ok(serde_json::from_value(payload)?)
}

/// Applies `result` to `state` if `ticket` is still the latest request.
///
/// Returns whether the result was applied.
pub fn commit<T>(
    tracker: &RequestTracker,
    ticket: Ticket,
    state: &mut ViewState<T>,
    result: Result<T, FetchError>,
) -> bool {
    if !tracker.is_current(ticket) {
        debug!(?ticket, closed = tracker.is_closed(), "discarding stale response");
        return false;
    }
    if let Err(err) = &result {
        warn!(%err, "fetch failed, keeping previous data");
    }
    state.settle(result);
    true
}
