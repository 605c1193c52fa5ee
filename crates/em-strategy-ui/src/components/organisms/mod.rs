//! Page-level regions composed from atoms.

mod footer;
mod navbar;

pub use footer::{Footer, FooterProps};
pub use navbar::{Navbar, NavbarProps};
