//! Data model and presentation logic of the portfolio page.
//!
//! Nothing in this crate touches the DOM; the frontend maps these types
//! onto components.

pub mod domain;
pub mod shared;
