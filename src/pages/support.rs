//! Support Page
//!
//! Searchable FAQ.

use leptos::prelude::*;
use superclient_core::domain::{filter_faq, FaqItem};

const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        title: "Como adiciono um contato?",
        content: "Abra Contatos e clique em Novo contato. O cadastro e salvo automaticamente enquanto voce digita.",
    },
    FaqItem {
        title: "Onde ficam salvos os contatos?",
        content: "Os contatos ficam armazenados neste navegador e nao sao enviados ao servidor.",
    },
    FaqItem {
        title: "Como funcionam os lembretes de aniversario?",
        content: "Aniversarios dos proximos 7 dias aparecem em Notificacoes ate serem marcados como vistos.",
    },
    FaqItem {
        title: "Como e calculado o ticket medio?",
        content: "O valor total do pipeline dividido pela quantidade de negocios em todas as etapas.",
    },
    FaqItem {
        title: "Por que a maior categoria aparece sem dados?",
        content: "Quando nao ha despesas ou a categoria vencedora nao esta cadastrada, o painel financeiro mostra sem dados.",
    },
    FaqItem {
        title: "Fui desconectado, o que aconteceu?",
        content: "Sua sessao expirou no servidor. Entre novamente para continuar.",
    },
];

#[component]
pub fn SupportPage() -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let results = move || query.with(|q| filter_faq(FAQ_ITEMS, q).into_iter().copied().collect::<Vec<_>>());

    view! {
        <div class="support-page">
            <h1>"Suporte"</h1>
            <input
                type="search"
                class="faq-search"
                placeholder="Buscar na ajuda..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <Show
                when=move || !results().is_empty()
                fallback=|| view! { <p class="empty-state">"Nenhum resultado."</p> }
            >
                <div class="faq-list">
                    <For
                        each=results
                        key=|item| item.title
                        children=|item| view! {
                            <details class="faq-item">
                                <summary>{item.title}</summary>
                                <p>{item.content}</p>
                            </details>
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
