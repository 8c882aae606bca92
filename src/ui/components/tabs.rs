//! Tab list, triggers and panels.
//!
//! Triggers fetch their panel over HTMX and swap the whole tab root, so the
//! active tab lives only in the rendered page. Nothing is pushed to history.

use leptos::prelude::*;

use crate::dashboard::{Tab, TabSelector};

/// Element id replaced by a tab swap.
pub const TABS_ROOT_ID: &str = "dashboard-tabs";

/// Row of triggers, one per tab.
#[component]
pub fn TabsList(selector: TabSelector) -> impl IntoView {
    view! {
        <div
            role="tablist"
            class="grid w-full grid-cols-4 h-10 items-center rounded-md bg-muted p-1 text-muted-foreground"
        >
            {Tab::ALL
                .into_iter()
                .map(|tab| view! { <TabsTrigger tab=tab active=selector.is_active(tab) /> })
                .collect_view()}
        </div>
    }
}

/// A single tab trigger.
#[component]
pub fn TabsTrigger(tab: Tab, active: bool) -> impl IntoView {
    let state = if active { "active" } else { "inactive" };
    let classes = if active {
        "inline-flex items-center justify-center rounded-sm px-3 py-1.5 text-sm font-medium \
         bg-background text-foreground shadow-sm"
    } else {
        "inline-flex items-center justify-center rounded-sm px-3 py-1.5 text-sm font-medium"
    };
    let target = format!("#{TABS_ROOT_ID}");

    view! {
        <button
            type="button"
            role="tab"
            class=classes
            aria-selected=active.to_string()
            data-state=state
            hx-get=tab.href()
            hx-target=target
            hx-swap="outerHTML"
        >
            {tab.label()}
        </button>
    }
}

/// Panel body for one tab.
#[component]
pub fn TabsContent(tab: Tab, children: Children) -> impl IntoView {
    view! {
        <div role="tabpanel" data-panel=tab.as_str() class="space-y-6">
            {children()}
        </div>
    }
}
