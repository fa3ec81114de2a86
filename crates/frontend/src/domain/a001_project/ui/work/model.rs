//! Work section - Model (catalog fetch)

use crate::shared::api_utils::fetch_text_no_store;
use contracts::domain::a001_project::aggregate::ProjectRecord;
use contracts::domain::a001_project::catalog::parse_catalog;

/// Load the project catalog document, bypassing the HTTP cache.
pub async fn fetch_catalog(url: &str) -> Result<Vec<ProjectRecord>, String> {
    let text = fetch_text_no_store(url).await?;
    parse_catalog(&text).map_err(|e| e.to_string())
}
