//! Highest-version selection

use crate::domain::PackageCandidate;
use crate::error::SelectionError;

/// Pick the candidate with the greatest version
///
/// Among equal versions the first one encountered is kept.
pub fn select_highest<I>(candidates: I) -> Result<PackageCandidate, SelectionError>
where
    I: IntoIterator<Item = PackageCandidate>,
{
    let mut candidates = candidates.into_iter();
    let mut highest = candidates.next().ok_or(SelectionError::EmptyCandidateSet)?;

    for candidate in candidates {
        if candidate.version() > highest.version() {
            highest = candidate;
        }
    }

    Ok(highest)
}
