//! Scroll-driven and decorative scenes.

pub mod avatar;
pub mod background;
pub mod story;
