//! Synthetic ballot populations.
//!
//! These are input fixtures: aggregation itself never touches a random
//! number generator. Callers inject any [`rand::Rng`], typically a seeded
//! `ChaCha8Rng`, and get back an ordinary validated [`Profile`].
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let profile = agora::generators::impartial_culture(&mut rng, &["A", "B", "C"], 10).unwrap();
//! assert_eq!(profile.voters(), 10);
//! assert_eq!(profile.candidates(), 3);
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::profile::{InvalidProfile, Profile};

/// An impartial-culture population: every voter draws a uniformly random
/// complete ranking of `candidates`.
pub fn impartial_culture<R: Rng>(
    rng: &mut R,
    candidates: &[&str],
    voters: usize,
) -> Result<Profile, InvalidProfile> {
    let mut profile = Profile::with_candidates(candidates)?;
    let mut order = candidates.to_vec();
    for _ in 0..voters {
        order.shuffle(rng);
        profile.add_ranking(&order)?;
    }
    Ok(profile)
}

/// A population of complete scored ballots with every score drawn uniformly
/// from `0..=max_score`, for range voting.
pub fn uniform_scores<R: Rng>(
    rng: &mut R,
    candidates: &[&str],
    voters: usize,
    max_score: usize,
) -> Result<Profile, InvalidProfile> {
    let mut profile = Profile::with_candidates(candidates)?;
    let dist = Uniform::new_inclusive(0, max_score);
    for _ in 0..voters {
        let ballot: Vec<(&str, usize)> =
            candidates.iter().map(|&name| (name, dist.sample(rng))).collect();
        profile.add_scored(&ballot)?;
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::methods::{Method, Range, VotingMethod};

    #[test]
    fn candidate_order_is_seed_independent() {
        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(999);
        let pa = impartial_culture(&mut a, &["A", "B", "C"], 5).unwrap();
        let pb = impartial_culture(&mut b, &["A", "B", "C"], 5).unwrap();
        assert_eq!(pa.candidate("C"), pb.candidate("C"));
    }

    #[test]
    fn same_seed_same_population() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let pa = impartial_culture(&mut a, &["A", "B", "C", "D"], 12).unwrap();
        let pb = impartial_culture(&mut b, &["A", "B", "C", "D"], 12).unwrap();
        assert_eq!(pa, pb);
    }

    #[test]
    fn generated_rankings_are_complete() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let profile = impartial_culture(&mut rng, &["A", "B", "C"], 8).unwrap();
        // Complete-ranking methods accept the whole population.
        assert!(Method::Borda.apply(&profile).unwrap().is_some());
    }

    #[test]
    fn scored_population_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let profile = uniform_scores(&mut rng, &["A", "B"], 20, 5).unwrap();
        let count = Range::count(&profile).unwrap();
        assert!(count.score().iter().all(|&s| s <= 20 * 5));
    }
}
