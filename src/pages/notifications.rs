//! Notifications Page
//!
//! Birthdays in the coming week, plus the unseen badge shown in the nav.

use chrono::Local;
use leptos::prelude::*;
use superclient_core::domain::upcoming_birthdays;

use crate::browser;
use crate::context::{use_app_context, AppContext};

/// Number shown on the notifications badge
pub fn unseen_badge(ctx: AppContext) -> Signal<usize> {
    Signal::derive(move || {
        // acknowledgements arrive as contacts-change events
        ctx.contacts_version.track();
        let today = browser::today();
        let upcoming = ctx.contacts.with(|contacts| upcoming_birthdays(contacts, today).len());
        ctx.with_services(|s| s.notifications.unseen_count(upcoming, today, &Local))
            .unwrap_or(0)
    })
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let ctx = use_app_context();

    let rows = move || {
        let today = browser::today();
        ctx.contacts.with(|contacts| {
            upcoming_birthdays(contacts, today)
                .into_iter()
                .map(|item| {
                    let when = match item.diff_days {
                        0 => "Hoje".to_string(),
                        1 => "Amanha".to_string(),
                        days => format!("Em {} dias", days),
                    };
                    (
                        item.contact.id.clone(),
                        item.contact.display_name().to_string(),
                        item.next.format("%d/%m").to_string(),
                        when,
                    )
                })
                .collect::<Vec<_>>()
        })
    };

    let mark_seen = move |_| {
        ctx.with_services(|s| s.notifications.mark_seen(browser::now()));
    };

    view! {
        <div class="notifications-page">
            <header class="page-header">
                <h1>"Notificacoes"</h1>
                <button type="button" class="secondary-btn" on:click=mark_seen>
                    "Marcar como visto"
                </button>
            </header>

            <Show
                when=move || !rows().is_empty()
                fallback=|| view! { <p class="empty-state">"Nenhum aniversario nos proximos 7 dias."</p> }
            >
                <ul class="birthday-list">
                    <For
                        each=rows
                        key=|row| row.0.clone()
                        children=|(_, name, date, when)| view! {
                            <li class="birthday-item">
                                <span class="birthday-name">{name}</span>
                                <span class="birthday-date">{date}</span>
                                <span class="birthday-when">{when}</span>
                            </li>
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
