//! DOM interaction checks that need a real browser (`wasm-pack test --headless --chrome`).
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use em_strategy_ui::AppRouter;
use em_strategy_ui::components::atoms::{ButtonVariant, PrimaryButton};
use em_strategy_ui::viewport::{ManualViewport, ViewportContext, ViewportProvider, use_is_mobile};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::Router;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> Element {
    let document = gloo::utils::document();
    let root = document.create_element("div").expect("create mount point");
    gloo::utils::body()
        .append_child(&root)
        .expect("attach mount point");
    root
}

async fn settle() {
    TimeoutFuture::new(0).await;
}

fn button(root: &Element) -> HtmlElement {
    root.query_selector("button")
        .expect("query")
        .expect("button rendered")
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

#[derive(Properties, PartialEq)]
struct CounterProps {
    clicks: Rc<Cell<u32>>,
    disabled: bool,
}

#[function_component(CountingButton)]
fn counting_button(props: &CounterProps) -> Html {
    let clicks = Rc::clone(&props.clicks);
    let onclick = Callback::from(move |_| clicks.set(clicks.get() + 1));
    html! {
        <PrimaryButton variant={ButtonVariant::Form} disabled={props.disabled} {onclick}>
            {"Count"}
        </PrimaryButton>
    }
}

#[wasm_bindgen_test]
async fn enabled_button_fires_once_per_click() {
    let root = mount_point();
    let clicks = Rc::new(Cell::new(0));
    let _app = yew::Renderer::<CountingButton>::with_root_and_props(
        root.clone(),
        CounterProps {
            clicks: Rc::clone(&clicks),
            disabled: false,
        },
    )
    .render();
    settle().await;

    let element = button(&root);
    element.click();
    assert_eq!(clicks.get(), 1);
    element.click();
    assert_eq!(clicks.get(), 2);
}

#[wasm_bindgen_test]
async fn disabled_button_never_fires() {
    let root = mount_point();
    let clicks = Rc::new(Cell::new(0));
    let _app = yew::Renderer::<CountingButton>::with_root_and_props(
        root.clone(),
        CounterProps {
            clicks: Rc::clone(&clicks),
            disabled: true,
        },
    )
    .render();
    settle().await;

    button(&root).click();
    button(&root).click();
    assert_eq!(clicks.get(), 0);
}

#[derive(Properties, PartialEq)]
struct FlagProps {
    viewport: ViewportContext,
}

#[function_component(MobileFlag)]
fn mobile_flag() -> Html {
    let is_mobile = use_is_mobile();
    html! { <output>{ if is_mobile { "mobile" } else { "desktop" } }</output> }
}

#[function_component(FlagHost)]
fn flag_host(props: &FlagProps) -> Html {
    html! {
        <ViewportProvider context={props.viewport.clone()}>
            <MobileFlag />
        </ViewportProvider>
    }
}

fn flag_text(root: &Element) -> String {
    root.text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
async fn hook_follows_simulated_resizes_and_releases_on_unmount() {
    let root = mount_point();
    let viewport = Rc::new(ManualViewport::with_width(1280));
    let context = ViewportContext::from_rc(viewport.clone());
    let app = yew::Renderer::<FlagHost>::with_root_and_props(
        root.clone(),
        FlagProps { viewport: context },
    )
    .render();
    settle().await;
    assert_eq!(flag_text(&root), "desktop");
    assert_eq!(viewport.listener_count(), 1);

    viewport.set_width(500);
    settle().await;
    assert_eq!(flag_text(&root), "mobile");

    viewport.set_width(768);
    settle().await;
    assert_eq!(flag_text(&root), "desktop");

    app.destroy();
    settle().await;
    assert_eq!(viewport.listener_count(), 0);
    viewport.set_width(320);
    settle().await;
    assert_eq!(flag_text(&root), "");
}

#[derive(Properties, PartialEq)]
struct RoutedProps {
    history: AnyHistory,
}

#[function_component(RoutedApp)]
fn routed_app(props: &RoutedProps) -> Html {
    html! {
        <Router history={props.history.clone()}>
            <AppRouter login={html! { <main id="login" /> }} />
        </Router>
    }
}

#[wasm_bindgen_test]
async fn unknown_path_lands_on_the_root_page() {
    let root = mount_point();
    let history = AnyHistory::from(MemoryHistory::new());
    history.push("/nope");
    let _app = yew::Renderer::<RoutedApp>::with_root_and_props(
        root.clone(),
        RoutedProps {
            history: history.clone(),
        },
    )
    .render();
    settle().await;
    settle().await;

    assert!(root.query_selector("#login").expect("query").is_some());
    assert_eq!(history.location().path(), "/");
}
