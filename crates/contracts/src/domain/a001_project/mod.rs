pub mod aggregate;
pub mod card;
pub mod catalog;
