//! Signup page view with email/password/confirmation form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::use_auth;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
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

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            // Local precondition: no network call when the passwords differ.
            if password() != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match api::register(email(), password()).await {
                Ok(_) => {
                    loading.set(false);
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/login");
                        }
                    }
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h2 { class: "auth-title", "Create Account" }
                p { class: "auth-subtitle", "Start tracking your expenses peacefully" }

                form {
                    onsubmit: handle_signup,
                    class: "auth-form",

                    div {
                        class: "form-field",
                        label { "Email" }
                        Input {
                            r#type: "email",
                            placeholder: "Enter your email",
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
                            placeholder: "Create a password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Confirm Password" }
                        Input {
                            r#type: "password",
                            placeholder: "Confirm your password",
                            required: true,
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    if let Some(err) = error() {
                        p { class: "form-error", "{err}" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating Account..." } else { "Sign Up" }
                    }

                    p {
                        class: "auth-switch",
                        "Already have an account? "
                        a { href: "/login", "Login" }
                    }
                }
            }
        }
    }
}
