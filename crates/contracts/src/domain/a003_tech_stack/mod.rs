pub mod aggregate;
pub mod icons;
