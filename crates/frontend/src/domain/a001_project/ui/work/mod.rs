//! Work section UI Module (MVVM)
//!
//! Structure:
//! - model.rs: catalog fetch
//! - view_model.rs: CatalogVm with RwSignals, shared through context
//! - view.rs: WorkSection (search, tag bar, grid, empty state)
//! - tag_bar.rs / card.rs: pieces of the grid

mod card;
mod model;
mod tag_bar;
mod view;
mod view_model;

pub use card::ProjectCardView;
pub use tag_bar::TagBar;
pub use view::WorkSection;
pub use view_model::{use_catalog, CatalogVm};
