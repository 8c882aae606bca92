//! Tab root: the trigger strip plus the single active panel.

use std::sync::Arc;

use leptos::prelude::*;

use crate::dashboard::{Fixtures, Tab, TabSelector};
use crate::ui::components::{TABS_ROOT_ID, TabsList};

use super::{ApplicationsPanel, CommunicationsPanel, OverviewPanel, RecommendationsPanel};

/// Renders the tab strip and mounts only the active panel.
///
/// This element is also the HTMX swap target, so a tab request returns it
/// whole with a different selector.
#[component]
pub fn DashboardTabs(selector: TabSelector, fixtures: Arc<Fixtures>) -> impl IntoView {
    let panel = match selector.active() {
        Tab::Overview => view! { <OverviewPanel fixtures=fixtures /> }.into_any(),
        Tab::Applications => view! { <ApplicationsPanel fixtures=fixtures /> }.into_any(),
        Tab::Communications => view! { <CommunicationsPanel fixtures=fixtures /> }.into_any(),
        Tab::Recommendations => view! { <RecommendationsPanel fixtures=fixtures /> }.into_any(),
    };

    view! {
        <div id=TABS_ROOT_ID class="space-y-6" data-active-tab=selector.active().as_str()>
            <TabsList selector=selector />
            {panel}
        </div>
    }
}
