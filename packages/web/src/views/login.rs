//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::use_auth;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the dashboard
    if !auth().loading && auth().user.is_some() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/dashboard");
            }
        }
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            loading.set(true);

            match api::login_password(email(), password()).await {
                Ok(user) => {
                    loading.set(false);
                    let mut state = auth();
                    state.user = Some(user);
                    state.loading = false;
                    auth.set(state);
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                }
                Err(err) => {
                    loading.set(false);
                    // Provider error text goes to a blocking alert; the form
                    // keeps whatever was typed.
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(&err.to_string());
                        }
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    let _ = err;
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h2 { class: "auth-title", "Welcome Back" }
                p { class: "auth-subtitle", "Login to access your dashboard" }

                form {
                    onsubmit: handle_login,
                    class: "auth-form",

                    div {
                        class: "form-field",
                        label { "Email" }
                        Input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Password" }
                        Input {
                            r#type: "password",
                            placeholder: "Enter your password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Log in" }
                    }

                    p {
                        class: "auth-switch",
                        "Don't have an account? "
                        a { href: "/signup", "Create one" }
                    }
                }
            }
        }
    }
}
