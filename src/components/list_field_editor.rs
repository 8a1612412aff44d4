//! List Field Editor Component
//!
//! Editable rows for one repeatable contact field (phones, emails, ...).
//! Rows are keyed by index so inputs keep focus while typing.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::ContactListField;

#[component]
pub fn ListFieldEditor(field: ContactListField) -> impl IntoView {
    let ctx = use_app_context();

    let entries = Signal::derive(move || {
        ctx.contact_form.with(|form| {
            form.as_ref()
                .map(|contact| contact.list(field).to_vec())
                .unwrap_or_default()
        })
    });

    let input_type = match field {
        ContactListField::Phones => "tel",
        ContactListField::Emails => "email",
        _ => "text",
    };

    view! {
        <fieldset class="list-field">
            <legend>{field.label()}</legend>
            <For
                each=move || 0..entries.with(Vec::len)
                key=|index| *index
                children=move |index| {
                    let value = move || entries.with(|e| e.get(index).cloned().unwrap_or_default());
                    view! {
                        <div class="list-field-row">
                            <input
                                type=input_type
                                prop:value=value
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ctx.edit_contacts(|editor| editor.set_list_entry(field, index, &value));
                                }
                            />
                            <button
                                type="button"
                                class="remove-entry-btn"
                                on:click=move |_| ctx.edit_contacts(|editor| editor.remove_list_entry(field, index))
                            >
                                "−"
                            </button>
                        </div>
                    }
                }
            />
            <button
                type="button"
                class="add-entry-btn"
                on:click=move |_| ctx.edit_contacts(|editor| editor.add_list_entry(field))
            >
                "+ Adicionar"
            </button>
        </fieldset>
    }
}
