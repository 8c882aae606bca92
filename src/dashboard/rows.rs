//! Display rows derived from the fixture records.
//!
//! Each `*_rows` function returns a lazy iterator over the given slice. The
//! iterators are `Clone`, so a listing can be walked again from the start.
//! [`Listing::Recent`] keeps only the first [`RECENT_LIMIT`] records in their
//! fixture order; nothing is sorted or filtered.

use super::classify::{StatusStyle, Tone};
use super::model::{Application, ApplicationStatus, Communication, Recommendation};

/// Number of records shown on the Overview panel.
pub const RECENT_LIMIT: usize = 3;

/// How much of a record list to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Listing {
    /// Every record.
    #[default]
    Full,
    /// The first [`RECENT_LIMIT`] records.
    Recent,
}

impl Listing {
    fn limit(self) -> usize {
        match self {
            Self::Full => usize::MAX,
            Self::Recent => RECENT_LIMIT,
        }
    }
}

/// First character of each space-separated word.
///
/// "University of Toronto" becomes "UoT".
#[must_use]
pub fn initials(name: &str) -> String {
    name.split(' ').filter_map(|word| word.chars().next()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRow {
    pub id: String,
    pub university: String,
    pub program: String,
    pub initials: String,
    pub logo: String,
    pub status: ApplicationStatus,
    pub style: StatusStyle,
    pub progress: u8,
    pub country: String,
    /// `M/D/YYYY`, no zero padding.
    pub deadline: String,
}

impl From<&Application> for ApplicationRow {
    fn from(app: &Application) -> Self {
        Self {
            id: app.id.clone(),
            university: app.university.clone(),
            program: app.program.clone(),
            initials: initials(&app.university),
            logo: app.logo.clone(),
            status: app.status,
            style: app.status.style(),
            progress: app.progress.get(),
            country: app.country.clone(),
            deadline: app.deadline.format("%-m/%-d/%Y").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunicationRow {
    pub id: String,
    pub counsellor: String,
    pub initials: String,
    pub message: String,
    pub timestamp: String,
    pub kind: &'static str,
    pub priority: &'static str,
    pub priority_tone: Tone,
}

impl From<&Communication> for CommunicationRow {
    fn from(comm: &Communication) -> Self {
        Self {
            id: comm.id.clone(),
            counsellor: comm.counsellor.clone(),
            initials: initials(&comm.counsellor),
            message: comm.message.clone(),
            timestamp: comm.timestamp.clone(),
            kind: comm.kind.as_str(),
            priority: comm.priority.as_str(),
            priority_tone: comm.priority.tone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRow {
    pub id: String,
    pub university: String,
    pub program: String,
    pub match_score: u8,
    pub reasons: Vec<String>,
    pub country: String,
    pub tuition_fee: String,
    /// `#N`.
    pub ranking: String,
    pub acceptance_rate: String,
}

impl From<&Recommendation> for RecommendationRow {
    fn from(rec: &Recommendation) -> Self {
        Self {
            id: rec.id.clone(),
            university: rec.university.clone(),
            program: rec.program.clone(),
            match_score: rec.match_score.get(),
            reasons: rec.reasons.clone(),
            country: rec.country.clone(),
            tuition_fee: rec.tuition_fee.clone(),
            ranking: format!("#{}", rec.ranking),
            acceptance_rate: rec.acceptance_rate.clone(),
        }
    }
}

pub fn application_rows(
    applications: &[Application],
    listing: Listing,
) -> impl Iterator<Item = ApplicationRow> + Clone + '_ {
    applications
        .iter()
        .take(listing.limit())
        .map(ApplicationRow::from)
}

pub fn communication_rows(
    communications: &[Communication],
    listing: Listing,
) -> impl Iterator<Item = CommunicationRow> + Clone + '_ {
    communications
        .iter()
        .take(listing.limit())
        .map(CommunicationRow::from)
}

/// Recommendations are only shown in full.
pub fn recommendation_rows(
    recommendations: &[Recommendation],
) -> impl Iterator<Item = RecommendationRow> + Clone + '_ {
    recommendations.iter().map(RecommendationRow::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Fixtures;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Stanford University"), "SU");
        assert_eq!(initials("University of Toronto"), "UoT");
        assert_eq!(initials("Mike Chen"), "MC");
        assert_eq!(initials("Sarah  Johnson"), "SJ");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_recent_is_prefix_of_full() {
        let fixtures = Fixtures::embedded().unwrap();

        let full: Vec<_> = application_rows(&fixtures.applications, Listing::Full).collect();
        let recent: Vec<_> = application_rows(&fixtures.applications, Listing::Recent).collect();
        assert_eq!(full.len(), fixtures.applications.len());
        assert_eq!(recent.len(), RECENT_LIMIT);
        assert_eq!(recent.as_slice(), &full[..RECENT_LIMIT]);

        let full: Vec<_> = communication_rows(&fixtures.communications, Listing::Full).collect();
        let recent: Vec<_> =
            communication_rows(&fixtures.communications, Listing::Recent).collect();
        assert_eq!(recent.as_slice(), &full[..RECENT_LIMIT.min(full.len())]);
    }

    #[test]
    fn test_recent_shorter_list_is_untouched() {
        let fixtures = Fixtures::embedded().unwrap();
        let two = &fixtures.applications[..2];
        let ids: Vec<_> = application_rows(two, Listing::Recent)
            .map(|row| row.id)
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_rows_are_restartable() {
        let fixtures = Fixtures::embedded().unwrap();
        let rows = recommendation_rows(&fixtures.recommendations);
        let first: Vec<_> = rows.clone().map(|row| row.university).collect();
        let second: Vec<_> = rows.map(|row| row.university).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_application_row_projection() {
        let fixtures = Fixtures::embedded().unwrap();
        let row = ApplicationRow::from(&fixtures.applications[0]);
        assert_eq!(row.university, "Stanford University");
        assert_eq!(row.initials, "SU");
        assert_eq!(row.deadline, "12/15/2024");
        assert_eq!(row.progress, 85);
        assert_eq!(row.status, ApplicationStatus::UnderReview);
        assert_eq!(row.style, ApplicationStatus::UnderReview.style());
    }

    #[test]
    fn test_recommendation_row_keeps_reason_order() {
        let fixtures = Fixtures::embedded().unwrap();
        let row = RecommendationRow::from(&fixtures.recommendations[0]);
        assert_eq!(row.ranking, "#3");
        assert_eq!(
            row.reasons,
            [
                "Strong CS program",
                "Industry connections",
                "Matches your profile"
            ]
        );
    }

    #[test]
    fn test_communication_row_priority() {
        let fixtures = Fixtures::embedded().unwrap();
        let row = CommunicationRow::from(&fixtures.communications[1]);
        assert_eq!(row.counsellor, "Mike Chen");
        assert_eq!(row.priority, "high");
        assert_eq!(row.priority_tone, Tone::Destructive);
        assert_eq!(row.kind, "reminder");
    }
}
