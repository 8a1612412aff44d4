//! Contacts Page
//!
//! Contact grid with a side panel that shows either the read-only detail
//! or the edit form of the open contact.

use leptos::prelude::*;

use crate::components::{ContactCard, ContactDetail, ContactForm};
use crate::context::use_app_context;
use crate::models::Contact;

#[component]
pub fn ContactsPage() -> impl IntoView {
    let ctx = use_app_context();

    let new_contact = move |_| {
        let id = Contact::id_for(js_sys::Date::now() as u64);
        ctx.edit_contacts(|editor| editor.open_new(id));
    };

    view! {
        <div class="contacts-page">
            <header class="page-header">
                <h1>"Contatos"</h1>
                <button type="button" class="primary-btn" on:click=new_contact>
                    "Novo contato"
                </button>
            </header>

            <div class="contacts-layout">
                <div class="contact-grid">
                    <Show
                        when=move || !ctx.contacts.with(Vec::is_empty)
                        fallback=|| view! { <p class="empty-state">"Nenhum contato cadastrado."</p> }
                    >
                        {move || {
                            ctx.contacts
                                .get()
                                .into_iter()
                                .map(|contact| view! { <ContactCard contact=contact /> })
                                .collect_view()
                        }}
                    </Show>
                </div>

                <aside class="contact-panel">
                    {move || {
                        if ctx.contact_form.with(Option::is_some) {
                            view! { <ContactForm /> }.into_any()
                        } else if let Some(contact) = ctx.selected_contact.get() {
                            view! { <ContactDetail contact=contact /> }.into_any()
                        } else {
                            view! { <p class="empty-state">"Selecione um contato."</p> }.into_any()
                        }
                    }}
                </aside>
            </div>
        </div>
    }
}
