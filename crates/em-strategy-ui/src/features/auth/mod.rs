//! Sign-in surface handed to the router.
//!
//! Credential checks, sessions, and redirects after sign-in belong to the
//! authentication service; this module only renders the form and reports what
//! the visitor entered.

mod login;

pub use login::{LoginPage, LoginPageProps, LoginSubmission};
