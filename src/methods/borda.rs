use super::VotingMethod;
use crate::profile::{InvalidProfile, Profile};

/// Borda count: a ballot listing `n` candidates awards `n - 1 - i` points to
/// the candidate in position `i`, so the points come from the ballot's own
/// length. Requires every ballot to rank the whole candidate set.
#[derive(Debug)]
pub struct Borda {
    score: Vec<usize>,
}

impl VotingMethod for Borda {
    fn count(profile: &Profile) -> Result<Self, InvalidProfile> {
        let mut score = vec![0usize; profile.candidates()];
        for ranking in profile.complete_rankings()? {
            let n = ranking.len();
            for (i, &c) in ranking.iter().enumerate() {
                // One point for every candidate ranked below `c` on this
                // ballot.
                score[c] = score[c].checked_add(n - 1 - i).ok_or(InvalidProfile::Overflow)?;
            }
        }
        Ok(Borda { score })
    }

    fn score(&self) -> &[usize] {
        &self.score
    }
}
