//! Full page document.

use leptos::prelude::*;

use crate::dashboard::TabSelector;
use crate::ui::DashboardContext;
use crate::ui::dashboard::{DashboardHeader, DashboardTabs, Welcome};

/// Vendored htmx build, relative to the static directory.
pub const HTMX_ASSET: &str = "vendor/htmx-2.0.8.min.js";

/// Main application component.
///
/// Every page load starts on the Overview tab.
#[component]
pub fn App(context: DashboardContext) -> impl IntoView {
    let DashboardContext { fixtures, student } = context;
    let notifications = fixtures.notifications;
    let name = student.name.clone();
    let htmx_src = format!("/static/{HTMX_ASSET}");

    view! {
        <!doctype html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Student application dashboard"/>

                <title>"EduTracker - Dashboard"</title>

                // Local scripts only (no CDN)
                <script src=htmx_src></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-background text-foreground antialiased">
                <DashboardHeader student=student notifications=notifications />
                <main id="app" class="container mx-auto px-4 py-8">
                    <Welcome name=name />
                    <DashboardTabs selector=TabSelector::new() fixtures=fixtures />
                </main>
            </body>
        </html>
    }
}
