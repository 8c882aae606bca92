//! Dashboard layout components.
//!
//! One panel per [`crate::dashboard::Tab`], the tab root that mounts the
//! active panel, and the page header.

mod applications;
mod badges;
mod communications;
mod header;
mod overview;
mod recommendations;
mod shell;

pub use applications::ApplicationsPanel;
pub use communications::CommunicationsPanel;
pub use header::{DashboardHeader, Welcome};
pub use overview::OverviewPanel;
pub use recommendations::RecommendationsPanel;
pub use shell::DashboardTabs;
