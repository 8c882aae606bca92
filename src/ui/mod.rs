//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the dashboard,
//! following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Full page document
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`dashboard`]: Dashboard panels and layout

pub mod app;
pub mod components;
pub mod dashboard;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::StudentConfig;
use crate::dashboard::{Fixtures, Tab, TabSelector};

use app::App;
use dashboard::DashboardTabs;

/// Everything a dashboard render reads.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub fixtures: Arc<Fixtures>,
    pub student: StudentConfig,
}

/// Render the full HTML document, Overview tab active.
#[must_use]
pub fn render_page(context: &DashboardContext) -> String {
    let context = context.clone();
    Owner::new().with(move || view! { <App context=context /> }.to_html())
}

/// Render the tab root fragment with `tab` active.
#[must_use]
pub fn render_tab(context: &DashboardContext, tab: Tab) -> String {
    let selector = TabSelector::from(tab);
    let fixtures = Arc::clone(&context.fixtures);
    Owner::new().with(move || {
        view! { <DashboardTabs selector=selector fixtures=fixtures /> }.to_html()
    })
}
