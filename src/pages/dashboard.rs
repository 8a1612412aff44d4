//! Dashboard Page
//!
//! Summary cards for pipeline, finance, access and contacts. Each section is
//! fetched independently; a failed request leaves its card at zero.

use leptos::prelude::*;
use leptos::task::spawn_local;
use superclient_core::domain::{
    format_value, summarize_access, summarize_finance, summarize_pipeline, upcoming_birthdays,
};

use crate::browser;
use crate::commands;
use crate::components::{CategoryChip, StatCard};
use crate::context::use_app_context;
use crate::store::{store_set_finance, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    // Load every section on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(columns) = commands::load_pipeline_board(ctx).await {
                store.columns().set(columns);
            }
        });
        spawn_local(async move {
            if let Ok(data) = commands::load_finance_data(ctx).await {
                store_set_finance(&store, data);
            }
        });
        spawn_local(async move {
            if let Ok(roles) = commands::list_roles(ctx).await {
                store.roles().set(roles);
            }
        });
        spawn_local(async move {
            if let Ok(modules) = commands::list_modules(ctx).await {
                store.modules().set(modules);
            }
        });
        spawn_local(async move {
            if let Ok(invites) = commands::list_invites(ctx).await {
                store.invites().set(invites);
            }
        });
    });

    let pipeline = Memo::new(move |_| {
        store.columns().with(|columns| {
            let summary = summarize_pipeline(columns);
            (
                summary.total_count,
                summary.total_value,
                summary.avg_ticket,
                summary.top_stage.map(|column| column.title.clone()),
            )
        })
    });

    let finance = Memo::new(move |_| {
        store.expenses().with(|expenses| {
            store.categories().with(|categories| {
                let summary = summarize_finance(expenses, categories);
                (
                    summary.total_spend,
                    summary.top_category.cloned(),
                    summary.top_category_value,
                )
            })
        })
    });

    let access = Memo::new(move |_| {
        store.roles().with(|roles| {
            store.modules().with(|modules| {
                store.invites().with(|invites| summarize_access(roles, modules, invites))
            })
        })
    });

    let birthdays = Memo::new(move |_| {
        ctx.contacts
            .with(|contacts| upcoming_birthdays(contacts, browser::today()).len())
    });

    view! {
        <div class="dashboard-page">
            <h1>"Visao geral"</h1>

            <section class="dashboard-section">
                <h2>"Pipeline"</h2>
                <div class="stat-grid">
                    <StatCard
                        label="Negocios"
                        value=Signal::derive(move || pipeline.with(|p| p.0.to_string()))
                    />
                    <StatCard
                        label="Valor total"
                        value=Signal::derive(move || pipeline.with(|p| format_value(p.1)))
                    />
                    <StatCard
                        label="Ticket medio"
                        value=Signal::derive(move || pipeline.with(|p| format_value(p.2)))
                    />
                    <StatCard
                        label="Etapa principal"
                        value=Signal::derive(move || {
                            pipeline.with(|p| p.3.clone().unwrap_or_else(|| "-".to_string()))
                        })
                    />
                </div>
            </section>

            <section class="dashboard-section">
                <h2>"Financeiro"</h2>
                <div class="stat-grid">
                    <StatCard
                        label="Gasto total"
                        value=Signal::derive(move || finance.with(|f| format_value(f.0)))
                    />
                    <div class="stat-card">
                        <span class="stat-label">"Maior categoria"</span>
                        {move || match finance.with(|f| f.1.clone()) {
                            Some(category) => view! { <CategoryChip category=category /> }.into_any(),
                            None => view! { <strong class="stat-value">"Sem dados"</strong> }.into_any(),
                        }}
                        <span class="stat-hint">
                            {move || finance.with(|f| if f.1.is_some() { format_value(f.2) } else { String::new() })}
                        </span>
                    </div>
                </div>
            </section>

            <section class="dashboard-section">
                <h2>"Acessos"</h2>
                <div class="stat-grid">
                    <StatCard label="Perfis" value=Signal::derive(move || access.with(|a| a.roles_count.to_string())) />
                    <StatCard label="Membros" value=Signal::derive(move || access.with(|a| a.members_count.to_string())) />
                    <StatCard
                        label="Modulos ativos"
                        value=Signal::derive(move || access.with(|a| a.enabled_modules.to_string()))
                    />
                    <StatCard
                        label="Convites pendentes"
                        value=Signal::derive(move || access.with(|a| a.pending_invites.to_string()))
                    />
                </div>
            </section>

            <section class="dashboard-section">
                <h2>"Contatos"</h2>
                <div class="stat-grid">
                    <StatCard label="Contatos" value=Signal::derive(move || ctx.contacts.with(Vec::len).to_string()) />
                    <StatCard
                        label="Aniversarios na semana"
                        value=Signal::derive(move || birthdays.get().to_string())
                    />
                </div>
            </section>
        </div>
    }
}
