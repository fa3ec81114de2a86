pub mod aggregate;
pub mod rail;
