//! Embedded sample data.

use std::collections::HashSet;

use serde::Deserialize;

use super::model::{Application, Communication, OverviewStat, Recommendation};

/// Sample data compiled into the binary.
const SAMPLE: &str = include_str!("../../fixtures/sample.yaml");

/// Errors raised while decoding fixture data.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The document is not valid YAML or does not match the record shapes.
    #[error("failed to decode fixtures: {0}")]
    Decode(#[from] serde_yaml::Error),

    /// Two records of the same kind share an identifier.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Every record the dashboard displays.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixtures {
    /// Count shown on the header bell.
    pub notifications: u32,
    pub stats: Vec<OverviewStat>,
    pub applications: Vec<Application>,
    pub communications: Vec<Communication>,
    pub recommendations: Vec<Recommendation>,
}

impl Fixtures {
    /// Decode the sample data compiled into the binary.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_yaml(SAMPLE)
    }

    /// Decode fixtures from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, FixtureError> {
        let fixtures: Self = serde_yaml::from_str(source)?;
        ensure_unique("application", fixtures.applications.iter().map(|a| &a.id))?;
        ensure_unique(
            "communication",
            fixtures.communications.iter().map(|c| &c.id),
        )?;
        ensure_unique(
            "recommendation",
            fixtures.recommendations.iter().map(|r| &r.id),
        )?;
        Ok(fixtures)
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a String>,
) -> Result<(), FixtureError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                kind,
                id: id.clone(),
            });
        }
    }
    Ok(())
}
