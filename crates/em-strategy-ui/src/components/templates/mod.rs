//! Page frames that wrap arbitrary content.

mod unauthenticated_page;

pub use unauthenticated_page::{UnauthenticatedPage, UnauthenticatedPageProps};
