use yew::prelude::*;

use crate::components::atoms::{
    ButtonVariant, Checkbox, Icon, IconName, PrimaryButton, SecondaryButton,
};
use crate::components::molecules::{Card, InfoCard};
use crate::components::templates::UnauthenticatedPage;
use crate::style::StyleSheet;
use crate::theme::{colors, radius, space, weights};

/// Values entered into the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginSubmission {
    /// Email address as typed, trimmed.
    pub email: String,
    /// Password as typed.
    pub password: String,
    /// "Remember me" choice.
    pub remember: bool,
}

/// Props for [`LoginPage`].
#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    /// Receives the form values on submit.
    #[prop_or_default]
    pub on_submit: Callback<LoginSubmission>,
    /// Requests a one-time sign-in link instead of a password.
    #[prop_or_default]
    pub on_magic_link: Callback<MouseEvent>,
    /// Disables the form while a submission is in flight.
    #[prop_or_default]
    pub busy: bool,
}

fn layout_style() -> StyleSheet {
    StyleSheet::new()
        .set("display", "grid")
        .set("grid-template-columns", "repeat(auto-fit, minmax(280px, 1fr))")
        .px("gap", u32::from(space(5)))
        .set("align-items", "start")
}

fn field_style() -> StyleSheet {
    StyleSheet::new()
        .set("display", "block")
        .set("width", "100%")
        .set("box-sizing", "border-box")
        .set("padding", format!("{}px {}px", space(1) + 2, space(2)))
        .set("border", format!("1px solid {}", colors::BORDER.hex))
        .px("border-radius", u32::from(radius(1)))
        .px("font-size", 15)
        .px("margin", u32::from(space(0)))
}

fn stack_style() -> StyleSheet {
    StyleSheet::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .px("gap", u32::from(space(3)))
}

fn input_callback(target: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            target.set(input.value());
        }
    })
}

/// Sign-in form inside the unauthenticated page frame.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let remember = remember.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(LoginSubmission {
                email: email.trim().to_string(),
                password: (*password).clone(),
                remember: *remember,
            });
        })
    };
    let on_remember = {
        let remember = remember.clone();
        Callback::from(move |checked: bool| remember.set(checked))
    };

    html! {
        <UnauthenticatedPage>
            <div class="em-login" style={layout_style().render()}>
                <section class="em-login__pitch" style={stack_style().render()}>
                    <h1 style={StyleSheet::new()
                        .set("margin", "0")
                        .px("font-size", 32)
                        .set("font-weight", weights::SEMIBOLD.to_string())
                        .render()}
                    >
                        {"Strategy work, in one place."}
                    </h1>
                    <InfoCard
                        icon={IconName::Compass}
                        title="Engagement roadmaps"
                        description="Follow milestones and decisions for every active engagement."
                    />
                    <InfoCard
                        icon={IconName::ShieldCheck}
                        title="Private by default"
                        description="Documents are shared only with the people on your engagement."
                    />
                </section>
                <Card class="em-login__card">
                    <form class="em-login__form" style={stack_style().render()} onsubmit={onsubmit}>
                        <h2 style={StyleSheet::new().set("margin", "0").px("font-size", 22).render()}>
                            {"Sign in"}
                        </h2>
                        <label class="em-login__field">
                            <span>{"Email"}</span>
                            <input
                                type="email"
                                name="email"
                                autocomplete="email"
                                required={true}
                                value={(*email).clone()}
                                oninput={input_callback(email.clone())}
                                style={field_style().render()}
                            />
                        </label>
                        <label class="em-login__field">
                            <span>{"Password"}</span>
                            <input
                                type="password"
                                name="password"
                                autocomplete="current-password"
                                required={true}
                                value={(*password).clone()}
                                oninput={input_callback(password.clone())}
                                style={field_style().render()}
                            />
                        </label>
                        <Checkbox label="Remember me" name="remember" checked={*remember} onchange={on_remember} />
                        <PrimaryButton
                            variant={ButtonVariant::Form}
                            button_type="submit"
                            disabled={props.busy}
                            icon={html! { <Icon name={IconName::Lock} size={18} /> }}
                        >
                            {"Sign in"}
                        </PrimaryButton>
                        <SecondaryButton
                            icon={html! { <Icon name={IconName::Mail} size={18} /> }}
                            disabled={props.busy}
                            onclick={props.on_magic_link.clone()}
                        >
                            {"Email me a sign-in link"}
                        </SecondaryButton>
                    </form>
                </Card>
            </div>
        </UnauthenticatedPage>
    }
}
