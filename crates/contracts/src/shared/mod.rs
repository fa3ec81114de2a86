pub mod config;
pub mod date_format;
pub mod html;
pub mod identity;
pub mod motion;
pub mod story;
pub mod theme;
