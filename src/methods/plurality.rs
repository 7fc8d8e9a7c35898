use super::VotingMethod;
use crate::profile::{InvalidProfile, Profile};

/// Plurality (first-past-the-post): one vote for each ballot's top-ranked
/// candidate. Partial ballots are fine, absence is just zero support.
#[derive(Debug)]
pub struct Plurality {
    score: Vec<usize>,
}

impl VotingMethod for Plurality {
    fn count(profile: &Profile) -> Result<Self, InvalidProfile> {
        let mut score = vec![0usize; profile.candidates()];
        for ranking in profile.rankings()? {
            debug_assert!(!ranking.is_empty());
            let first = ranking[0];
            score[first] = score[first].checked_add(1).ok_or(InvalidProfile::Overflow)?;
        }
        Ok(Plurality { score })
    }

    fn score(&self) -> &[usize] {
        &self.score
    }
}
