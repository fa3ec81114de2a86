//! Pinned story section (MVVM)
//!
//! - controller.rs: scroll progress and the one-time intro skip
//! - view.rs: StorySection, styling every scene from the timeline

mod controller;
mod view;

pub use controller::StoryController;
pub use view::StorySection;
