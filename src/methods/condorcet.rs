use super::VotingMethod;
use crate::profile::{InvalidProfile, Profile};

/// Condorcet's method: elect the candidate preferred to every rival by more
/// than half of the ballots. With complete rankings that is the same as
/// beating each rival head to head. No such candidate may exist, in which
/// case there is no winner.
#[derive(Debug)]
pub struct Condorcet {
    // Rivals each candidate holds a pairwise majority over.
    beats: Vec<usize>,
    candidates: usize,
}

impl VotingMethod for Condorcet {
    fn count(profile: &Profile) -> Result<Self, InvalidProfile> {
        let rankings = profile.complete_rankings()?;
        let n = profile.candidates();
        let voters = rankings.len();
        // wins[a * n + b] = ballots placing a above b
        let mut wins = vec![0; n * n];
        for ranking in &rankings {
            for i in 0..ranking.len() {
                for j in (i + 1)..ranking.len() {
                    wins[ranking[i] * n + ranking[j]] += 1;
                }
            }
        }
        let mut beats = vec![0; n];
        for a in 0..n {
            for b in 0..n {
                if a != b && 2 * wins[a * n + b] > voters {
                    beats[a] += 1;
                }
            }
        }
        Ok(Condorcet { beats, candidates: n })
    }

    fn score(&self) -> &[usize] {
        &self.beats
    }

    fn winner(&self) -> Option<usize> {
        (0..self.candidates).find(|&c| self.beats[c] + 1 == self.candidates)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::generators::impartial_culture;

    #[test]
    fn pairwise_champion_wins() {
        let mut profile = Profile::new();
        profile.add_ranking(&["A", "B", "C"]).unwrap();
        profile.add_ranking(&["B", "A", "C"]).unwrap();
        profile.add_ranking(&["B", "C", "A"]).unwrap();
        // B beats A 2-1 and C 3-0.
        let count = Condorcet::count(&profile).unwrap();
        assert_eq!(count.winner(), profile.candidate("B"));
    }

    #[test]
    fn cyclic_profile_has_no_winner() {
        let mut profile = Profile::new();
        profile.add_ranking(&["A", "B", "C"]).unwrap();
        profile.add_ranking(&["B", "C", "A"]).unwrap();
        profile.add_ranking(&["C", "A", "B"]).unwrap();
        let count = Condorcet::count(&profile).unwrap();
        assert_eq!(count.winner(), None);
    }

    #[test]
    fn single_candidate_wins_vacuously() {
        let mut profile = Profile::new();
        profile.add_ranking(&["A"]).unwrap();
        assert_eq!(Condorcet::count(&profile).unwrap().winner(), profile.candidate("A"));
    }

    #[test]
    fn partial_ballots_are_rejected() {
        let mut profile = Profile::new();
        profile.add_ranking(&["A", "B", "C"]).unwrap();
        profile.add_ranking(&["C", "B"]).unwrap();
        let err = Condorcet::count(&profile).unwrap_err();
        assert_eq!(err, InvalidProfile::Incomplete { listed: 2, expected: 3 });
    }

    // A winner's pairwise majorities cover the whole field.
    #[quickcheck]
    fn qc_winner_beats_every_rival(seed: u64, voters: u8) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let voters = voters as usize % 24 + 1;
        let profile = impartial_culture(&mut rng, &["A", "B", "C", "D"], voters).unwrap();
        let count = Condorcet::count(&profile).unwrap();
        match count.winner() {
            Some(w) => count.score()[w] == profile.candidates() - 1,
            None => true,
        }
    }
}
