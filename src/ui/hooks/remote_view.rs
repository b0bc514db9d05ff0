use std::sync::Arc;

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::view_state::ViewState;
use crate::ui::state::app_state::AppServices;
use crate::usecase::ports::api::FetchDescriptor;
use crate::usecase::services::fetch_service::{commit, fetch_payload, RequestTracker};

/// Fetches `descriptor` whenever `filters` changes and keeps the latest
/// answer in the returned signal.
///
/// Every request takes a ticket; only the newest ticket may commit, and the
/// tracker is cancelled when the calling component unmounts.
pub fn use_remote_view<T>(
    descriptor: FetchDescriptor,
    filters: Signal<FilterSelection>,
) -> Signal<ViewState<T>>
where
    T: DeserializeOwned + Default + 'static,
{
    let services = use_context::<AppServices>();
    let mut state = use_signal(ViewState::<T>::default);
    let tracker = use_hook(|| Arc::new(RequestTracker::new()));

    let tracker_for_effect = tracker.clone();
    use_effect(move || {
        let selection = filters();
        let ticket = tracker_for_effect.begin();
        state.write().begin_loading();

        let api = services.api.clone();
        let tracker = tracker_for_effect.clone();
        spawn(async move {
            let result = fetch_payload::<T>(api.as_ref(), &descriptor, &selection).await;
            if let Ok(mut guard) = state.try_write() {
                commit(&tracker, ticket, &mut *guard, result);
            }
        });
    });

    use_drop(move || tracker.cancel());

    state
}
