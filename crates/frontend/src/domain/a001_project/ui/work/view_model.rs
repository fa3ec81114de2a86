//! Work section - View Model

use super::model::fetch_catalog;
use contracts::domain::a001_project::aggregate::ProjectRecord;
use contracts::domain::a001_project::catalog::{CatalogStats, CatalogViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CatalogVm {
    pub state: RwSignal<CatalogViewState>,
    pub is_loading: RwSignal<bool>,
}

impl CatalogVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CatalogViewState::default()),
            is_loading: RwSignal::new(false),
        }
    }

    /// Fetch the catalog once. A failed load is logged and leaves the
    /// catalog empty.
    pub fn load(&self, url: String) {
        let state = self.state;
        let is_loading = self.is_loading;
        is_loading.set(true);
        spawn_local(async move {
            match fetch_catalog(&url).await {
                Ok(projects) => {
                    log::info!("catalog loaded: {} projects", projects.len());
                    state.update(|s| s.load(projects));
                }
                Err(e) => log::warn!("{} not found or invalid: {}", url, e),
            }
            is_loading.set(false);
        });
    }

    pub fn select_tag(&self, tag: String) {
        self.state.update(|s| s.select_tag(tag));
    }

    pub fn set_query(&self, query: String) {
        self.state.update(|s| s.set_query(query));
    }

    pub fn clear_query(&self) {
        self.state.update(|s| s.clear_query());
    }

    /// Visible list, recomputed whenever the view state changes.
    pub fn visible(&self) -> Memo<Vec<ProjectRecord>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.visible()))
    }

    pub fn stats(&self) -> Signal<CatalogStats> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.stats()))
    }
}

impl Default for CatalogVm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_catalog() -> CatalogVm {
    use_context::<CatalogVm>().expect("CatalogVm context not found")
}
