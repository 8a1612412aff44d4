//! Superclient Frontend App
//!
//! Root component: builds the browser services, provides context and
//! switches between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::{AppContext, Services};
use crate::pages::{
    unseen_badge, ContactsPage, DashboardPage, LoginPage, NotificationsPage, SupportPage,
};
use crate::store::DashboardState;

/// Page selection
#[derive(Clone, Copy, PartialEq)]
enum Page {
    Dashboard,
    Contacts,
    Notifications,
    Support,
}

impl Page {
    const NAV: [Page; 4] = [Page::Dashboard, Page::Contacts, Page::Notifications, Page::Support];

    fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Inicio",
            Page::Contacts => "Contatos",
            Page::Notifications => "Notificacoes",
            Page::Support => "Suporte",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(Services::browser());
    provide_context(ctx);
    provide_context(Store::new(DashboardState::default()));

    let (current_view, set_current_view) = signal(Page::Dashboard);
    let badge = unseen_badge(ctx);

    let sign_out = move |_| {
        ctx.with_services(|s| {
            s.contacts.flush();
            s.session.sign_out();
        });
    };

    view! {
        <Show when=move || ctx.logged_in.get() fallback=|| view! { <LoginPage /> }>
            <div class="app-layout">
                <nav class="sidebar">
                    <span class="brand">"Superclient"</span>
                    {Page::NAV
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    type="button"
                                    class=move || if current_view.get() == page { "nav-btn active" } else { "nav-btn" }
                                    on:click=move |_| set_current_view.set(page)
                                >
                                    {page.label()}
                                    {(page == Page::Notifications).then(|| view! {
                                        <Show when=move || { badge.get() > 0 }>
                                            <span class="badge">{move || badge.get()}</span>
                                        </Show>
                                    })}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button type="button" class="nav-btn logout-btn" on:click=sign_out>
                        "Sair"
                    </button>
                </nav>

                <main class="main-content">
                    {move || match current_view.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Contacts => view! { <ContactsPage /> }.into_any(),
                        Page::Notifications => view! { <NotificationsPage /> }.into_any(),
                        Page::Support => view! { <SupportPage /> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}
