use super::VotingMethod;
use crate::profile::{InvalidProfile, Profile};

/// Approval voting: listing a candidate anywhere on a ballot approves of
/// them, whatever the position.
pub struct Approval {
    score: Vec<usize>,
}

impl VotingMethod for Approval {
    fn count(profile: &Profile) -> Result<Self, InvalidProfile> {
        let mut score = vec![0usize; profile.candidates()];
        for ranking in profile.rankings()? {
            for &c in ranking {
                score[c] = score[c].checked_add(1).ok_or(InvalidProfile::Overflow)?;
            }
        }
        Ok(Approval { score })
    }

    fn score(&self) -> &[usize] {
        &self.score
    }
}
