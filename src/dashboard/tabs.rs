//! Tab selection state.

use std::fmt;
use std::str::FromStr;

/// One of the four dashboard panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Overview,
    Applications,
    Communications,
    Recommendations,
}

/// Error for a tab identifier outside the four known panels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab: {0}")]
pub struct UnknownTab(pub String);

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::Applications,
        Self::Communications,
        Self::Recommendations,
    ];

    /// Identifier used in routes and `data-panel` attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Applications => "applications",
            Self::Communications => "communications",
            Self::Recommendations => "recommendations",
        }
    }

    /// Trigger label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Applications => "Applications",
            Self::Communications => "Communications",
            Self::Recommendations => "Recommendations",
        }
    }

    /// Fragment route that renders this tab.
    #[must_use]
    pub fn href(self) -> String {
        format!("/tabs/{}", self.as_str())
    }
}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active panel of one dashboard render.
///
/// Owned by the dashboard and handed to children by value; there is no
/// process-wide selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSelector {
    active: Tab,
}

impl TabSelector {
    /// Selector in its initial state ([`Tab::Overview`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active tab.
    #[must_use]
    pub fn active(self) -> Tab {
        self.active
    }

    /// Whether `tab` is the active one.
    #[must_use]
    pub fn is_active(self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Make `tab` active. Returns `true` if the selection changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }
}

impl From<Tab> for TabSelector {
    fn from(active: Tab) -> Self {
        Self { active }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_overview() {
        let selector = TabSelector::new();
        assert_eq!(selector.active(), Tab::Overview);
        assert!(selector.is_active(Tab::Overview));
    }

    #[test]
    fn test_select_is_idempotent() {
        for tab in Tab::ALL {
            let mut selector = TabSelector::new();
            selector.select(tab);
            let once = selector;
            assert!(!selector.select(tab));
            assert_eq!(selector, once);
            assert_eq!(selector.active(), tab);
        }
    }

    #[test]
    fn test_any_to_any_transition() {
        let mut selector = TabSelector::new();
        for from in Tab::ALL {
            for to in Tab::ALL {
                selector.select(from);
                selector.select(to);
                assert_eq!(selector.active(), to);
            }
        }
    }

    #[test]
    fn test_selector_from_tab_matches_select() {
        for tab in Tab::ALL {
            let mut selected = TabSelector::new();
            selected.select(tab);
            assert_eq!(TabSelector::from(tab), selected);
        }
    }

    #[test]
    fn test_parse_tab() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>(), Ok(tab));
        }
        assert_eq!(
            "settings".parse::<Tab>(),
            Err(UnknownTab("settings".to_string()))
        );
        assert_eq!(Tab::Recommendations.href(), "/tabs/recommendations");
    }
}
