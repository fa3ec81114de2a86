pub mod spotlight;
pub mod work;
