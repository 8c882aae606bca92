//! SVG icon components.
//!
//! Lucide-style line icons, rendered inline. Every icon carries a
//! `data-icon` attribute with its kebab-case name.

use leptos::prelude::*;

use crate::dashboard::Icon;

/// Default icon size, extended by the caller's classes.
const ICON_SIZE: &str = "h-4 w-4";

/// Draw the icon chosen by the classifier or a stat card.
#[component]
pub fn IconGlyph(
    icon: Icon,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    match icon {
        Icon::CheckCircle => view! { <CheckCircleIcon class=class /> }.into_any(),
        Icon::Clock => view! { <ClockIcon class=class /> }.into_any(),
        Icon::AlertCircle => view! { <AlertCircleIcon class=class /> }.into_any(),
        Icon::Users => view! { <UsersIcon class=class /> }.into_any(),
        Icon::Hourglass => view! { <HourglassIcon class=class /> }.into_any(),
        Icon::TrendingUp => view! { <TrendingUpIcon class=class /> }.into_any(),
        Icon::MessageSquare => view! { <MessageSquareIcon class=class /> }.into_any(),
        Icon::Star => view! { <StarIcon class=class /> }.into_any(),
        Icon::Bell => view! { <BellIcon class=class /> }.into_any(),
        Icon::Search => view! { <SearchIcon class=class /> }.into_any(),
        Icon::Filter => view! { <FilterIcon class=class /> }.into_any(),
    }
}

/// Shared 24x24 stroke frame around an icon's shapes.
#[component]
fn IconFrame(name: &'static str, class: String, children: Children) -> impl IntoView {
    let classes = if class.is_empty() {
        ICON_SIZE.to_string()
    } else {
        format!("{ICON_SIZE} {class}")
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
            data-icon=name
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

/// Circle with a check mark.
#[component]
pub fn CheckCircleIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="check-circle" class=class>
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
            <polyline points="22 4 12 14.01 9 11.01" />
        </IconFrame>
    }
}

/// Clock face.
#[component]
pub fn ClockIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="clock" class=class>
            <circle cx="12" cy="12" r="10" />
            <polyline points="12 6 12 12 16 14" />
        </IconFrame>
    }
}

/// Circle with an exclamation mark.
#[component]
pub fn AlertCircleIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="alert-circle" class=class>
            <circle cx="12" cy="12" r="10" />
            <line x1="12" y1="8" x2="12" y2="12" />
            <line x1="12" y1="16" x2="12.01" y2="16" />
        </IconFrame>
    }
}

/// Two people.
#[component]
pub fn UsersIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="users" class=class>
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
            <circle cx="9" cy="7" r="4" />
            <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
            <path d="M16 3.13a4 4 0 0 1 0 7.75" />
        </IconFrame>
    }
}

#[component]
pub fn HourglassIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="hourglass" class=class>
            <path d="M5 22h14" />
            <path d="M5 2h14" />
            <path d="M17 22v-4.172a2 2 0 0 0-.586-1.414L12 12l-4.414 4.414A2 2 0 0 0 7 17.828V22" />
            <path d="M7 2v4.172a2 2 0 0 0 .586 1.414L12 12l4.414-4.414A2 2 0 0 0 17 6.172V2" />
        </IconFrame>
    }
}

/// Rising trend line.
#[component]
pub fn TrendingUpIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="trending-up" class=class>
            <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
            <polyline points="16 7 22 7 22 13" />
        </IconFrame>
    }
}

/// Speech bubble.
#[component]
pub fn MessageSquareIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="message-square" class=class>
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        </IconFrame>
    }
}

#[component]
pub fn StarIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="star" class=class>
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
        </IconFrame>
    }
}

/// Notification bell.
#[component]
pub fn BellIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="bell" class=class>
            <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
            <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
        </IconFrame>
    }
}

/// Magnifying glass.
#[component]
pub fn SearchIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="search" class=class>
            <circle cx="11" cy="11" r="8" />
            <path d="m21 21-4.3-4.3" />
        </IconFrame>
    }
}

/// Funnel.
#[component]
pub fn FilterIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <IconFrame name="filter" class=class>
            <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3" />
        </IconFrame>
    }
}
