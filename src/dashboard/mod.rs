//! Dashboard domain: records, classification, tab state and display rows.
//!
//! Everything here is plain data and pure lookups; rendering lives in
//! [`crate::ui`].
//!
//! # Example
//!
//! ```rust
//! use edutracker::dashboard::{ApplicationStatus, Fixtures, Listing, Tone, application_rows};
//!
//! let fixtures = Fixtures::embedded().unwrap();
//! let recent: Vec<_> = application_rows(&fixtures.applications, Listing::Recent).collect();
//! assert_eq!(recent.len(), 3);
//!
//! assert_eq!(ApplicationStatus::parse("accepted").style().tone, Tone::Success);
//! ```

mod actions;
mod classify;
mod fixtures;
mod model;
mod rows;
mod tabs;

pub use actions::{Action, UnknownAction};
pub use classify::{Icon, StatusStyle, Tone};
pub use fixtures::{FixtureError, Fixtures};
pub use model::{
    Application, ApplicationStatus, Communication, CommunicationKind, OverviewStat, Percent,
    PercentOutOfRange, Priority, Recommendation,
};
pub use rows::{
    ApplicationRow, CommunicationRow, Listing, RECENT_LIMIT, RecommendationRow, application_rows,
    communication_rows, initials, recommendation_rows,
};
pub use tabs::{Tab, TabSelector, UnknownTab};
