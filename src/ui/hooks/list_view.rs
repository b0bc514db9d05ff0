use dioxus::prelude::*;

use crate::domain::entities::table::TableSpec;
use crate::ui::state::app_state::AppServices;
use crate::usecase::services::list_view::ListView;
use crate::usecase::services::sample_service::ResolvedRows;

/// Keeps a `ListView` fed with the rows `rows` resolves to. Each new set of
/// rows resets the view to page 1.
pub fn use_list_view<R>(spec: fn() -> TableSpec<R>, rows: Memo<ResolvedRows<R>>) -> Signal<ListView<R>>
where
    R: Clone + PartialEq + 'static,
{
    let services = use_context::<AppServices>();
    let page_size = services.config.page_size;
    let mut list = use_signal(move || ListView::new(spec(), page_size));

    use_effect(move || {
        let records = rows.read().rows.clone();
        list.write().set_records(records);
    });

    list
}
