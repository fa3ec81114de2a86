pub mod api_utils;
pub mod clipboard;
pub mod config;
pub mod dom;
pub mod icons;
pub mod reveal;
pub mod theme;
pub mod vendor;
