//! Record shapes displayed by the dashboard.
//!
//! All records are decoded once from the embedded fixtures and never mutated.
//! Status, type and priority strings outside their enumerations decode to an
//! explicit `Unknown` variant instead of failing.

use std::fmt;
use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::Deserialize;

use super::classify::{Icon, Tone};

/// Integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub struct Percent(u8);

/// Error returned when a percentage exceeds 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("percentage out of range: {0} (expected 0..=100)")]
pub struct PercentOutOfRange(pub u8);

impl Percent {
    /// Largest representable percentage.
    pub const MAX: Self = Self(100);

    /// Raw percentage value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percent {
    type Error = PercentOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            Err(PercentOutOfRange(value))
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Review status of a university application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    /// Documents submitted, nothing heard back yet.
    Submitted,
    /// Admissions office is reviewing the file.
    UnderReview,
    /// Interview stage.
    Interview,
    /// Offer received.
    Accepted,
    /// Application declined.
    Rejected,
    /// Placed on the waiting list.
    Waitlisted,
    /// Any value outside the enumeration.
    #[serde(other)]
    Unknown,
}

impl ApplicationStatus {
    /// Every status the classifier knows about, in declaration order.
    pub const KNOWN: [Self; 6] = [
        Self::Submitted,
        Self::UnderReview,
        Self::Interview,
        Self::Accepted,
        Self::Rejected,
        Self::Waitlisted,
    ];

    /// Parse a raw status string. Unrecognized values become [`Self::Unknown`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "submitted" => Self::Submitted,
            "under-review" => Self::UnderReview,
            "interview" => Self::Interview,
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            "waitlisted" => Self::Waitlisted,
            _ => Self::Unknown,
        }
    }

    /// Wire name of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::UnderReview => "under-review",
            Self::Interview => "interview",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Waitlisted => "waitlisted",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label, hyphens replaced and words capitalized.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::Interview => "Interview",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Waitlisted => "Waitlisted",
            Self::Unknown => "Unknown",
        }
    }
}

/// Kind of counsellor communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationKind {
    Message,
    Reminder,
    Update,
    #[serde(other)]
    Unknown,
}

impl CommunicationKind {
    /// Wire name, also used as the display label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Reminder => "reminder",
            Self::Update => "update",
            Self::Unknown => "unknown",
        }
    }
}

/// Urgency of a counsellor communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl Priority {
    /// Every priority the classifier knows about.
    pub const KNOWN: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Parse a raw priority string. Unrecognized values become [`Self::Unknown`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }

    /// Wire name, also used as the display label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

/// One university program submission.
///
/// `progress` and `status` are independent: nothing derives or checks one
/// from the other.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Application {
    pub id: String,
    pub university: String,
    pub program: String,
    pub status: ApplicationStatus,
    pub deadline: NaiveDate,
    pub progress: Percent,
    pub country: String,
    /// Opaque logo URI.
    pub logo: String,
}

/// A message from a counsellor to the student.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Communication {
    pub id: String,
    pub counsellor: String,
    pub message: String,
    /// Display string such as "2 hours ago"; not a structured time.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: CommunicationKind,
    pub priority: Priority,
}

/// A suggested university/program match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub university: String,
    pub program: String,
    pub match_score: Percent,
    /// Shown in the given order.
    pub reasons: Vec<String>,
    pub country: String,
    /// Free-form, currency embedded (e.g. "$58,000/year").
    pub tuition_fee: String,
    pub ranking: NonZeroU32,
    /// Free-form display string (e.g. "22%").
    pub acceptance_rate: String,
}

/// A literal counter on the Overview panel.
///
/// Values are supplied with the fixtures and are never computed from the
/// record lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverviewStat {
    pub title: String,
    pub value: u32,
    pub caption: String,
    pub icon: Icon,
    pub tone: Tone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_bounds() {
        assert_eq!(Percent::try_from(0).unwrap().get(), 0);
        assert_eq!(Percent::try_from(100).unwrap(), Percent::MAX);
        assert_eq!(Percent::try_from(101), Err(PercentOutOfRange(101)));
        assert_eq!(Percent::try_from(85).unwrap().to_string(), "85%");
    }

    #[test]
    fn test_status_parse_round_trips_known_values() {
        for status in ApplicationStatus::KNOWN {
            assert_eq!(ApplicationStatus::parse(status.as_str()), status);
        }
        assert_eq!(
            ApplicationStatus::parse("zzz-unknown"),
            ApplicationStatus::Unknown
        );
        assert_eq!(ApplicationStatus::parse("Accepted"), ApplicationStatus::Unknown);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(ApplicationStatus::UnderReview.label(), "Under Review");
        assert_eq!(ApplicationStatus::Accepted.label(), "Accepted");
    }

    #[test]
    fn test_unknown_status_decodes_without_error() {
        let status: ApplicationStatus = serde_yaml::from_str("deferred").unwrap();
        assert_eq!(status, ApplicationStatus::Unknown);

        let status: ApplicationStatus = serde_yaml::from_str("under-review").unwrap();
        assert_eq!(status, ApplicationStatus::UnderReview);
    }

    #[test]
    fn test_priority_and_kind_fallback() {
        assert_eq!(Priority::parse("urgent"), Priority::Unknown);
        let kind: CommunicationKind = serde_yaml::from_str("broadcast").unwrap();
        assert_eq!(kind, CommunicationKind::Unknown);
        let priority: Priority = serde_yaml::from_str("high").unwrap();
        assert_eq!(priority, Priority::High);
    }
}
