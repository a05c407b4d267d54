//! Sign-in and registration page.
//!
//! Successful sign-in needs no explicit navigation: the `PublicOnly` guard
//! wrapping this page redirects to the dashboard once a user is present.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::{RegisterRequest, UserRole};
use crate::services::credentials::{CredentialStrategy, DEMO_STUDENT_EMAIL, DEMO_TEACHER_EMAIL};
use crate::state::auth::{AppAuthContext, AuthState};
use crate::state::notice::Notice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    role: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    let role = UserRole::from_input(role).ok_or("Choose a role.")?;
    Ok(RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned(), role })
}

fn tab_class(active: bool) -> &'static str {
    if active { "login-tab login-tab--active" } else { "login-tab" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AppAuthContext>();
    let auth_state = expect_context::<ReadSignal<AuthState>>();
    let notice = expect_context::<RwSignal<Option<Notice>>>();
    let demo_enabled = auth.credentials() == CredentialStrategy::Demo;

    let mode = RwSignal::new(Mode::SignIn);
    let form_error = RwSignal::new(String::new());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let reg_name = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());
    let reg_confirm = RwSignal::new(String::new());
    let reg_role = RwSignal::new(UserRole::Student.as_str().to_owned());

    let busy = move || auth_state.with(|s| s.loading);

    let on_login = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            form_error.set(String::new());
            let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    form_error.set(msg.to_owned());
                    return;
                }
            };

            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                leptos::task::spawn_local(async move {
                    match auth.login(&email_value, &password_value).await {
                        Ok(()) => notice.set(Some(Notice::success("Login successful", "Welcome back to EduLearn!"))),
                        Err(e) => notice.set(Some(Notice::from_auth_error(&e))),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, email_value, password_value, notice);
            }
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form_error.set(String::new());
        let request = match validate_register_input(
            &reg_name.get(),
            &reg_email.get(),
            &reg_password.get(),
            &reg_confirm.get(),
            &reg_role.get(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                form_error.set(msg.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match auth.register(request).await {
                    Ok(()) => notice.set(Some(Notice::success("Registration successful", "Welcome to EduLearn!"))),
                    Err(e) => notice.set(Some(Notice::from_auth_error(&e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, request);
        }
    };

    let use_demo = move |address: &'static str| {
        mode.set(Mode::SignIn);
        email.set(address.to_owned());
        password.set("demo".to_owned());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"EduLearn"</h1>
                <div class="login-tabs">
                    <button
                        class=move || tab_class(mode.get() == Mode::SignIn)
                        on:click=move |_| mode.set(Mode::SignIn)
                    >
                        "Sign in"
                    </button>
                    <button
                        class=move || tab_class(mode.get() == Mode::Register)
                        on:click=move |_| mode.set(Mode::Register)
                    >
                        "Register"
                    </button>
                </div>

                <Show
                    when=move || mode.get() == Mode::SignIn
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_register.clone()>
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Full name"
                                    prop:value=move || reg_name.get()
                                    on:input=move |ev| reg_name.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="you@school.edu"
                                    prop:value=move || reg_email.get()
                                    on:input=move |ev| reg_email.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || reg_password.get()
                                    on:input=move |ev| reg_password.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Confirm password"
                                    prop:value=move || reg_confirm.get()
                                    on:input=move |ev| reg_confirm.set(event_target_value(&ev))
                                />
                                <select
                                    class="login-input"
                                    prop:value=move || reg_role.get()
                                    on:change=move |ev| reg_role.set(event_target_value(&ev))
                                >
                                    <option value="student">"Student"</option>
                                    <option value="teacher">"Teacher"</option>
                                </select>
                                <button class="login-button" type="submit" disabled=busy>
                                    "Create account"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_login.clone()>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@school.edu"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=busy>
                            "Sign in"
                        </button>
                    </form>
                </Show>

                <Show when=move || !form_error.get().is_empty()>
                    <p class="login-message">{move || form_error.get()}</p>
                </Show>

                <Show when=move || demo_enabled>
                    <div class="login-divider"></div>
                    <p class="login-card__subtitle">"Try a demo account"</p>
                    <div class="login-demo">
                        <button class="btn" on:click=move |_| use_demo(DEMO_STUDENT_EMAIL)>
                            "Student demo"
                        </button>
                        <button class="btn" on:click=move |_| use_demo(DEMO_TEACHER_EMAIL)>
                            "Teacher demo"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
