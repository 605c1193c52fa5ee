//! Routing definitions for the EM Strategy UI.
use yew::prelude::*;
use yew_router::prelude::*;

/// Client-side routes.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Sign-in page at the site root.
    #[at("/")]
    Login,
    /// Any path without a page of its own.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route a visitor is sent to instead of this one, if any.
    #[must_use]
    pub const fn redirect_target(&self) -> Option<Self> {
        match self {
            Self::Login => None,
            Self::NotFound => Some(Self::Login),
        }
    }
}

/// Renders `route`, using `login` for the root page.
#[must_use]
pub fn switch(route: Route, login: &Html) -> Html {
    match route.redirect_target() {
        Some(target) => {
            #[cfg(target_arch = "wasm32")]
            gloo::console::log!("redirecting unmatched path to", target.to_path());
            html! { <Redirect<Route> to={target} /> }
        }
        None => login.clone(),
    }
}
