//! Contact Card Components
//!
//! Compact card for the contact grid, and the read-only detail panel.

use leptos::prelude::*;
use superclient_core::domain::maps_search_url;

use crate::context::use_app_context;
use crate::models::{Contact, ContactListField};

#[component]
pub fn ContactCard(contact: Contact) -> impl IntoView {
    let ctx = use_app_context();
    let first_phone = contact.filled(ContactListField::Phones).next().map(str::to_string);
    let first_email = contact.filled(ContactListField::Emails).next().map(str::to_string);
    let name = contact.display_name().to_string();

    view! {
        <div
            class="contact-card"
            on:click=move |_| {
                let contact = contact.clone();
                ctx.edit_contacts(|editor| editor.open(contact));
            }
        >
            <h3>{name}</h3>
            {first_phone.map(|phone| view! { <p class="contact-line">{phone}</p> })}
            {first_email.map(|email| view! { <p class="contact-line">{email}</p> })}
        </div>
    }
}

/// Read-only view of the selected contact
#[component]
pub fn ContactDetail(contact: Contact) -> impl IntoView {
    let ctx = use_app_context();

    let sections = ContactListField::ALL
        .into_iter()
        .filter_map(|field| {
            let values: Vec<String> = contact.filled(field).map(str::to_string).collect();
            if values.is_empty() {
                return None;
            }
            let rows = values
                .into_iter()
                .map(|value| match field {
                    ContactListField::Addresses => match maps_search_url(&value) {
                        Some(href) => view! {
                            <li><a href=href target="_blank" rel="noopener noreferrer">{value}</a></li>
                        }
                        .into_any(),
                        None => view! { <li>{value}</li> }.into_any(),
                    },
                    _ => view! { <li>{value}</li> }.into_any(),
                })
                .collect_view();
            Some(view! {
                <section class="contact-section">
                    <h4>{field.label()}</h4>
                    <ul>{rows}</ul>
                </section>
            })
        })
        .collect_view();

    view! {
        <div class="contact-detail">
            <h2>{contact.display_name().to_string()}</h2>
            {(!contact.birthday.is_empty())
                .then(|| view! { <p class="contact-birthday">"Aniversario: " {contact.birthday.clone()}</p> })}
            {sections}
            <div class="form-actions">
                <button
                    type="button"
                    class="primary-btn"
                    on:click=move |_| ctx.edit_contacts(|editor| editor.edit_selected())
                >
                    "Editar"
                </button>
                <button
                    type="button"
                    class="secondary-btn"
                    on:click=move |_| ctx.edit_contacts(|editor| editor.close_view())
                >
                    "Fechar"
                </button>
            </div>
        </div>
    }
}
