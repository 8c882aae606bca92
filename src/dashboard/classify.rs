//! Status and priority classification.
//!
//! Maps [`ApplicationStatus`] to a tone and icon, and [`Priority`] to a tone.
//! Both lookups are exhaustive over their enumerations; the `Unknown` arm is
//! the single place where the neutral fallback is chosen.

use serde::Deserialize;

use super::model::{ApplicationStatus, Priority};

/// Semantic color family used by badges, icons and stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Primary,
    Destructive,
    Secondary,
    #[default]
    Muted,
}

impl Tone {
    /// Tone used for anything the classifier does not recognize.
    pub const FALLBACK: Self = Self::Muted;

    /// Background and foreground CSS classes for this tone.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Success => "bg-success text-success-foreground",
            Self::Info => "bg-info text-info-foreground",
            Self::Warning => "bg-warning text-warning-foreground",
            Self::Primary => "bg-primary text-primary-foreground",
            Self::Destructive => "bg-destructive text-destructive-foreground",
            Self::Secondary => "bg-secondary text-secondary-foreground",
            Self::Muted => "bg-muted text-muted-foreground",
        }
    }

    /// Foreground-only CSS class, for icons drawn on a neutral surface.
    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Success => "text-success",
            Self::Info => "text-info",
            Self::Warning => "text-warning",
            Self::Primary => "text-primary",
            Self::Destructive => "text-destructive",
            Self::Secondary => "text-secondary-foreground",
            Self::Muted => "text-muted-foreground",
        }
    }
}

/// Icon symbols drawn by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    CheckCircle,
    Clock,
    AlertCircle,
    Users,
    Hourglass,
    TrendingUp,
    MessageSquare,
    Star,
    Bell,
    Search,
    Filter,
}

/// Display treatment for an application status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusStyle {
    pub tone: Tone,
    pub icon: Icon,
}

impl StatusStyle {
    /// Neutral tone with a clock.
    pub const FALLBACK: Self = Self {
        tone: Tone::FALLBACK,
        icon: Icon::Clock,
    };
}

impl ApplicationStatus {
    /// Tone and icon for this status.
    #[must_use]
    pub fn style(self) -> StatusStyle {
        let (tone, icon) = match self {
            Self::Accepted => (Tone::Success, Icon::CheckCircle),
            Self::Submitted => (Tone::Info, Icon::Clock),
            Self::UnderReview => (Tone::Warning, Icon::AlertCircle),
            Self::Interview => (Tone::Primary, Icon::Users),
            Self::Rejected => (Tone::Destructive, Icon::AlertCircle),
            Self::Waitlisted => (Tone::Muted, Icon::Hourglass),
            Self::Unknown => return StatusStyle::FALLBACK,
        };
        StatusStyle { tone, icon }
    }
}

impl Priority {
    /// Tone for this priority.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::High => Tone::Destructive,
            Self::Medium => Tone::Warning,
            Self::Low => Tone::Secondary,
            Self::Unknown => Tone::FALLBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_known_statuses_never_use_fallback() {
        for status in ApplicationStatus::KNOWN {
            assert_ne!(status.style(), StatusStyle::FALLBACK, "{status:?}");
        }
    }

    #[test]
    fn test_unknown_status_falls_back_deterministically() {
        let first = ApplicationStatus::parse("zzz-unknown").style();
        let second = ApplicationStatus::parse("zzz-unknown").style();
        assert_eq!(first, StatusStyle::FALLBACK);
        assert_eq!(first, second);
        assert_eq!(first.tone.classes(), "bg-muted text-muted-foreground");
        assert_eq!(first.icon, Icon::Clock);
    }

    #[test]
    fn test_accepted_signals_success() {
        let style = ApplicationStatus::Accepted.style();
        assert_eq!(style.tone, Tone::Success);
        assert_eq!(style.icon, Icon::CheckCircle);
        assert!(style.tone.classes().contains("bg-success"));
    }

    #[test]
    fn test_status_styles_are_distinct() {
        let styles: HashSet<_> = ApplicationStatus::KNOWN
            .into_iter()
            .map(ApplicationStatus::style)
            .collect();
        assert_eq!(styles.len(), ApplicationStatus::KNOWN.len());
    }

    #[test]
    fn test_priority_tones() {
        assert_eq!(Priority::High.tone(), Tone::Destructive);
        assert!(Priority::High.tone().classes().contains("destructive"));
        for priority in Priority::KNOWN {
            assert_ne!(priority.tone(), Tone::FALLBACK, "{priority:?}");
        }
        assert_eq!(Priority::parse("critical").tone(), Tone::FALLBACK);
    }
}
