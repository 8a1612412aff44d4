//! Contact Form Component
//!
//! Edit form bound to the open edit session. Every keystroke goes through
//! the editor, which auto-saves once the form has content.

use leptos::prelude::*;

use super::{DeleteConfirmButton, ListFieldEditor};
use crate::context::use_app_context;
use crate::models::ContactListField;

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_app_context();

    let name = move || ctx.contact_form.with(|f| f.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let birthday =
        move || ctx.contact_form.with(|f| f.as_ref().map(|c| c.birthday.clone()).unwrap_or_default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.edit_contacts(|editor| editor.save());
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <label>
                "Nome"
                <input
                    type="text"
                    prop:value=name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.edit_contacts(|editor| editor.set_name(value));
                    }
                />
            </label>
            <label>
                "Aniversario"
                <input
                    type="date"
                    prop:value=birthday
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.edit_contacts(|editor| editor.set_birthday(value));
                    }
                />
            </label>

            {ContactListField::ALL
                .into_iter()
                .map(|field| view! { <ListFieldEditor field=field /> })
                .collect_view()}

            <div class="form-actions">
                <button type="submit" class="primary-btn">"Salvar"</button>
                <button
                    type="button"
                    class="secondary-btn"
                    on:click=move |_| ctx.edit_contacts(|editor| editor.cancel())
                >
                    "Cancelar"
                </button>
                <DeleteConfirmButton
                    button_class="danger-btn"
                    on_confirm=move |_| ctx.edit_contacts(|editor| editor.delete())
                />
            </div>
        </form>
    }
}
