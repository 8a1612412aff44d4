//! Login Page
//!
//! Authentication is handled by the backend; this screen only records the
//! logged-in flag for the client.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.with_services(|s| s.session.sign_in(None));
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Superclient"</h1>
                <input type="email" placeholder="Email" autocomplete="username" />
                <input type="password" placeholder="Senha" autocomplete="current-password" />
                <button type="submit" class="primary-btn">"Entrar"</button>
            </form>
        </div>
    }
}
