//! Sign-in landing page. Submitting the form navigates to the app shell
//! unconditionally; there is no real authentication.

use crate::Route;
use dioxus::prelude::*;

const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; border-radius: 6px; background: #ffffff; border: 1px solid #d1d5db; padding: 8px 12px; font-size: 13px; color: #111827;";

#[component]
pub fn Landing() -> Element {
    let nav = navigator();

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f9fafb; padding: 0 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            div {
                style: "width: 100%; max-width: 420px;",
                div {
                    style: "display: flex; flex-direction: column; align-items: center; margin-bottom: 24px;",
                    div {
                        style: "display: flex; align-items: center; gap: 8px; margin-bottom: 8px;",
                        span { style: "width: 12px; height: 12px; border-radius: 2px; background: #2563eb;" }
                        span {
                            style: "letter-spacing: 0.25em; font-size: 14px; font-weight: 700; color: #111827;",
                            "AVILIGHT"
                        }
                    }
                    p {
                        style: "margin: 0; font-size: 11px; text-transform: uppercase; letter-spacing: 0.22em; color: #6b7280;",
                        "Sign in to your account"
                    }
                }

                div {
                    style: "border-radius: 16px; border: 1px solid #e5e7eb; background: #ffffff; box-shadow: 0 20px 25px rgba(209,213,219,0.5); padding: 24px;",
                    div {
                        style: "margin-bottom: 20px;",
                        h1 {
                            style: "margin: 0; font-size: 18px; font-weight: 600; color: #111827;",
                            "Welcome back"
                        }
                        p {
                            style: "margin: 4px 0 0 0; font-size: 13px; color: #6b7280;",
                            "Enter your details to access the AVILIGHT console."
                        }
                    }

                    form {
                        style: "display: flex; flex-direction: column; gap: 16px;",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            nav.push(Route::Home {});
                        },
                        div {
                            label {
                                r#for: "email",
                                style: "display: block; font-size: 11px; color: #374151; margin-bottom: 4px;",
                                "Email"
                            }
                            input {
                                id: "email",
                                r#type: "email",
                                initial_value: "giancarloregalado05@gmail.com",
                                placeholder: "you@example.com",
                                style: INPUT_STYLE,
                            }
                        }
                        div {
                            label {
                                r#for: "password",
                                style: "display: block; font-size: 11px; color: #374151; margin-bottom: 4px;",
                                "Password"
                            }
                            input {
                                id: "password",
                                r#type: "password",
                                initial_value: "••••••••",
                                placeholder: "Enter password",
                                style: INPUT_STYLE,
                            }
                        }
                        div {
                            style: "display: flex; align-items: center; justify-content: space-between; font-size: 11px; color: #4b5563;",
                            label {
                                style: "display: inline-flex; align-items: center; gap: 8px;",
                                input { r#type: "checkbox", checked: true }
                                span { "Remember this device" }
                            }
                            button {
                                r#type: "button",
                                style: "border: none; background: transparent; font-size: 11px; color: #2563eb; cursor: pointer;",
                                "Forgot password?"
                            }
                        }
                        button {
                            r#type: "submit",
                            style: "width: 100%; margin-top: 8px; padding: 10px 16px; border: none; border-radius: 6px; background: #2563eb; color: #ffffff; font-size: 13px; font-weight: 500; cursor: pointer;",
                            "Continue"
                        }
                    }
                }
            }
        }
    }
}
