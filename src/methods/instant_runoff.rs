use tracing::trace;

use super::VotingMethod;
use crate::profile::{InvalidProfile, Profile};

/// Instant-runoff (ranked-choice) voting.
///
/// Each round tallies every ballot's highest-ranked remaining candidate. A
/// strict majority wins on the spot; otherwise all candidates tied for the
/// fewest votes are eliminated together and the ballots are recounted.
/// Should a round find every survivor tied for the minimum, the
/// earliest-appearing survivor takes the seat, so counting always ends with
/// a majority holder or a single survivor.
#[derive(Debug)]
pub struct InstantRunoff {
    tally: Vec<usize>,
    rounds: usize,
    survivors: usize,
}

impl InstantRunoff {
    /// Number of counting rounds needed.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Candidates never eliminated.
    pub fn survivors(&self) -> usize {
        self.survivors
    }
}

impl VotingMethod for InstantRunoff {
    fn count(profile: &Profile) -> Result<Self, InvalidProfile> {
        let rankings = profile.complete_rankings()?;
        let n = profile.candidates();
        let voters = rankings.len();
        let mut remaining = vec![true; n];
        let mut survivors = n;
        let mut tally = vec![0; n];
        let mut rounds = 0;
        loop {
            rounds += 1;
            tally.fill(0);
            for ranking in &rankings {
                // Complete rankings always hold a remaining candidate.
                if let Some(&c) = ranking.iter().find(|&&c| remaining[c]) {
                    tally[c] += 1;
                }
            }
            trace!(round = rounds, ?tally, "tallied highest-ranked remaining candidates");
            if (0..n).any(|c| remaining[c] && 2 * tally[c] > voters) {
                break;
            }
            let min = (0..n).filter(|&c| remaining[c]).map(|c| tally[c]).min().unwrap();
            let lowest: Vec<usize> = (0..n).filter(|&c| remaining[c] && tally[c] == min).collect();
            if lowest.len() == survivors {
                // A full deadlock: every survivor shares the minimum. The
                // earliest-appearing one stays, everyone else goes.
                for &c in &lowest[1..] {
                    remaining[c] = false;
                }
                survivors = 1;
                break;
            }
            trace!(round = rounds, eliminated = ?lowest, "no majority, eliminating lowest tallies");
            for &c in &lowest {
                remaining[c] = false;
                survivors -= 1;
            }
        }
        Ok(InstantRunoff { tally, rounds, survivors })
    }

    fn score(&self) -> &[usize] {
        &self.tally
    }
}
