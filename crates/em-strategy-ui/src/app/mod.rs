//! Application root: configuration, viewport context, and the router.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SiteConfig;
use crate::features::auth::LoginPage;
use crate::viewport::{ViewportContext, ViewportProvider};

mod routes;

pub use routes::{Route, switch};

/// Props for [`AppRouter`].
#[derive(Properties, PartialEq)]
pub struct AppRouterProps {
    /// Element mounted at the site root.
    pub login: Html,
}

/// Static route table; must be rendered inside a router (e.g. `BrowserRouter`).
#[function_component(AppRouter)]
pub fn app_router(props: &AppRouterProps) -> Html {
    let login = props.login.clone();
    html! {
        <Switch<Route> render={move |route| switch(route, &login)} />
    }
}

/// Props for [`EmStrategyApp`].
#[derive(Properties, PartialEq)]
pub struct EmStrategyAppProps {
    /// Shell copy and links.
    #[prop_or_default]
    pub config: SiteConfig,
}

/// Browser application: providers around the routed pages.
#[function_component(EmStrategyApp)]
pub fn em_strategy_app(props: &EmStrategyAppProps) -> Html {
    let viewport = use_memo(|_| ViewportContext::browser(), ());
    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <ViewportProvider context={(*viewport).clone()}>
                <BrowserRouter>
                    <AppRouter login={html! { <LoginPage /> }} />
                </BrowserRouter>
            </ViewportProvider>
        </ContextProvider<SiteConfig>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = crate::config::load_from_document();
    gloo::console::log!("mounting EM Strategy UI", config.brand.clone());
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<EmStrategyApp>::with_root_and_props(root, EmStrategyAppProps { config })
            .render();
    } else {
        yew::Renderer::<EmStrategyApp>::with_props(EmStrategyAppProps { config }).render();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::render;
    use yew_router::history::{AnyHistory, History, MemoryHistory};

    #[function_component(RootAtLogin)]
    fn root_at_login() -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push("/");
        html! {
            <Router history={history}>
                <AppRouter login={html! { <main id="login-probe" /> }} />
            </Router>
        }
    }

    #[tokio::test]
    async fn root_path_mounts_the_login_element() {
        let html = render(|| html! { <RootAtLogin /> }).await;
        assert!(html.contains(r#"id="login-probe""#), "{html}");
    }
}
