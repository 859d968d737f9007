pub mod common;
pub mod contact_cta;
pub mod footer;
pub mod navbar;
