//! Page chrome: top bar, contact section and footer.

pub mod contact;
pub mod footer;
pub mod top_header;
