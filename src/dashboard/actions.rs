//! Inert dashboard actions.
//!
//! Search, filter, reply and the other buttons are wired to a hook that
//! records the request and changes nothing.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Search,
    Filter,
    ViewDetails,
    NewMessage,
    Reply,
    MarkAsRead,
    Apply,
    Favorite,
    AdjustPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl Action {
    pub const ALL: [Self; 9] = [
        Self::Search,
        Self::Filter,
        Self::ViewDetails,
        Self::NewMessage,
        Self::Reply,
        Self::MarkAsRead,
        Self::Apply,
        Self::Favorite,
        Self::AdjustPreferences,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Filter => "filter",
            Self::ViewDetails => "view-details",
            Self::NewMessage => "new-message",
            Self::Reply => "reply",
            Self::MarkAsRead => "mark-as-read",
            Self::Apply => "apply",
            Self::Favorite => "favorite",
            Self::AdjustPreferences => "adjust-preferences",
        }
    }

    /// Hook route, optionally scoped to one record.
    #[must_use]
    pub fn href(self, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("/actions/{}?id={id}", self.as_str()),
            None => format!("/actions/{}", self.as_str()),
        }
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
