//! Classifier-driven badges and small shared pieces.

use leptos::prelude::*;

use crate::dashboard::{ApplicationStatus, Tone};
use crate::ui::components::{Badge, BadgeVariant, IconGlyph};

/// Status badge: tone color, status icon and label.
#[component]
pub fn StatusBadge(status: ApplicationStatus) -> impl IntoView {
    let style = status.style();

    view! {
        <Badge variant=BadgeVariant::Tone(style.tone)>
            <IconGlyph icon=style.icon />
            <span class="ml-1">{status.label()}</span>
        </Badge>
    }
}

#[component]
pub fn PriorityBadge(label: &'static str, tone: Tone) -> impl IntoView {
    view! { <Badge variant=BadgeVariant::Tone(tone)>{label}</Badge> }
}

/// Label/value line inside a card.
#[component]
pub fn DetailRow(
    label: &'static str,
    #[prop(into)] value: String,
    #[prop(default = "")] value_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex justify-between text-sm">
            <span class="text-muted-foreground">{label}</span>
            <span class=value_class>{value}</span>
        </div>
    }
}
