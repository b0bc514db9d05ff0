use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::infra::export::csv::write_rows_csv;
use crate::usecase::services::list_view::ListView;

/// Writes every filtered row of `view` (all pages, search applied) to `path`.
pub fn export_view_csv<R>(view: &ListView<R>, path: &Path) -> Result<usize> {
    let headers = view.spec().headers();
    let rows = view.filtered_cells();
    write_rows_csv(path, &headers, &rows)?;
    info!(path = %path.display(), rows = rows.len(), "exported view");
    Ok(rows.len())
}
