//! The aggregation methods: each consumes a whole [`Profile`] and elects at
//! most one candidate.

mod approval;
pub use approval::Approval;
mod borda;
pub use borda::Borda;
mod condorcet;
pub use condorcet::Condorcet;
mod instant_runoff;
pub use instant_runoff::InstantRunoff;
mod plurality;
pub use plurality::Plurality;
mod range;
pub use range::Range;

use crate::profile::{InvalidProfile, Profile};

/// Trait shared by every voting method.
pub trait VotingMethod: Sized {
    /// Counts all the ballots into per-candidate totals.
    fn count(profile: &Profile) -> Result<Self, InvalidProfile>;

    /// Per-candidate totals in first-appearance order. Larger is better.
    fn score(&self) -> &[usize];

    /// The elected candidate: the first one to reach the maximal total.
    fn winner(&self) -> Option<usize> {
        first_max(self.score())
    }
}

/// The aggregation methods a profile can be tallied under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Method {
    Plurality,
    InstantRunoff,
    Borda,
    Approval,
    Range,
    Condorcet,
}

impl Method {
    /// Tally `profile` under this method and return the winning candidate.
    ///
    /// Every method except `Condorcet` elects a winner for any profile it
    /// accepts; ties go to the candidate appearing first in the profile.
    pub fn apply(self, profile: &Profile) -> Result<Option<usize>, InvalidProfile> {
        match self {
            Method::Plurality => Ok(Plurality::count(profile)?.winner()),
            Method::InstantRunoff => Ok(InstantRunoff::count(profile)?.winner()),
            Method::Borda => Ok(Borda::count(profile)?.winner()),
            Method::Approval => Ok(Approval::count(profile)?.winner()),
            Method::Range => Ok(Range::count(profile)?.winner()),
            Method::Condorcet => Ok(Condorcet::count(profile)?.winner()),
        }
    }
}

// First index holding the maximum, so that ties resolve towards candidates
// appearing earlier in the profile.
pub(crate) fn first_max(score: &[usize]) -> Option<usize> {
    let mut best = None;
    for (c, &s) in score.iter().enumerate() {
        match best {
            Some(b) if score[b] >= s => {}
            _ => best = Some(c),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_max_empty() {
        assert_eq!(first_max(&[]), None);
    }

    #[test]
    fn first_max_takes_earliest_tie() {
        assert_eq!(first_max(&[2, 7, 7, 1]), Some(1));
        assert_eq!(first_max(&[3, 3, 3]), Some(0));
    }

    #[test]
    fn every_method_rejects_an_empty_profile() {
        let profile = Profile::new();
        for method in [
            Method::Plurality,
            Method::InstantRunoff,
            Method::Borda,
            Method::Approval,
            Method::Range,
            Method::Condorcet,
        ] {
            assert_eq!(method.apply(&profile), Err(InvalidProfile::Empty));
        }
    }

    #[quickcheck]
    fn qc_first_max_is_maximal(xs: Vec<usize>) -> bool {
        match first_max(&xs) {
            Some(i) => xs.iter().all(|&x| xs[i] >= x),
            None => xs.is_empty(),
        }
    }
}
