use super::VotingMethod;
use crate::profile::{InvalidProfile, Profile};

/// Range (score) voting: each candidate's total is the sum of the scores
/// voters gave them. Candidates a ballot leaves out score zero on it; a
/// ballot without scores at all is invalid for this method.
#[derive(Debug)]
pub struct Range {
    score: Vec<usize>,
}

impl VotingMethod for Range {
    fn count(profile: &Profile) -> Result<Self, InvalidProfile> {
        let mut score = vec![0usize; profile.candidates()];
        for ballot in profile.scored()? {
            for &(c, s) in ballot {
                score[c] = score[c].checked_add(s).ok_or(InvalidProfile::Overflow)?;
            }
        }
        Ok(Range { score })
    }

    fn score(&self) -> &[usize] {
        &self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_scores() {
        let mut profile = Profile::new();
        profile.add_scored(&[("A", 5), ("B", 1)]).unwrap();
        profile.add_scored(&[("A", 2), ("B", 3)]).unwrap();
        let count = Range::count(&profile).unwrap();
        assert_eq!(count.score(), &[7, 4]);
        assert_eq!(count.winner(), profile.candidate("A"));
    }

    #[test]
    fn exact_tie_goes_to_first_appearance() {
        let mut profile = Profile::new();
        profile.add_scored(&[("A", 5), ("B", 3)]).unwrap();
        profile.add_scored(&[("A", 2), ("B", 4)]).unwrap();
        // 7 against 7: A was seen first, A takes it.
        assert_eq!(Range::count(&profile).unwrap().winner(), profile.candidate("A"));
    }

    #[test]
    fn unlisted_candidates_score_zero() {
        let mut profile = Profile::new();
        profile.add_scored(&[("A", 1), ("B", 4)]).unwrap();
        profile.add_scored(&[("A", 2)]).unwrap();
        let count = Range::count(&profile).unwrap();
        assert_eq!(count.score(), &[3, 4]);
    }

    #[test]
    fn rankings_are_rejected() {
        let mut profile = Profile::new();
        profile.add_scored(&[("A", 5)]).unwrap();
        profile.add_ranking(&["A", "B"]).unwrap();
        assert_eq!(Range::count(&profile).unwrap_err(), InvalidProfile::ExpectedScores);
    }

    #[test]
    fn overflowing_totals_are_an_error() {
        let mut profile = Profile::new();
        profile.add_scored(&[("A", usize::MAX)]).unwrap();
        profile.add_scored(&[("A", 1)]).unwrap();
        assert_eq!(Range::count(&profile).unwrap_err(), InvalidProfile::Overflow);
    }
}
