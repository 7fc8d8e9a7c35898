//! Ballot profiles: the input to every aggregation method.
//!
//! A [`Profile`] collects one ballot per voter over a shared candidate set.
//! Candidate names are interned to `usize` indices in order of first
//! appearance, and that order is the tie-break order used everywhere else in
//! the crate.

use thiserror::Error;

/// Why a profile (or one of its ballots) was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidProfile {
    /// The profile contains no ballots at all.
    #[error("profile contains no ballots")]
    Empty,
    /// A ballot listing no candidates carries no information.
    #[error("ballot lists no candidates")]
    EmptyBallot,
    /// The same candidate appeared twice on one ballot.
    #[error("candidate `{0}` appears twice on the same ballot")]
    Duplicate(String),
    /// A method that needs complete rankings was given a partial one.
    #[error("ballot ranks {listed} of {expected} candidates, but a complete ranking is required")]
    Incomplete { listed: usize, expected: usize },
    /// A method that consumes rankings was given a scored ballot.
    #[error("found a scored ballot where a ranking is required")]
    ExpectedRanking,
    /// A method that consumes scored ballots was given a ranking.
    #[error("found a ranking where a scored ballot is required")]
    ExpectedScores,
    /// A per-candidate total exceeded `usize::MAX`.
    #[error("candidate totals overflowed")]
    Overflow,
}

/// One voter's preference input.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Ballot {
    /// Candidates from most to least preferred, no duplicates. May list only
    /// a subset of the candidate set; methods decide whether that is valid.
    Ranking(Vec<usize>),
    /// One numeric score per listed candidate. Unlisted candidates score 0.
    Scored(Vec<(usize, usize)>),
}

/// An immutable collection of ballots over one candidate set.
///
/// Build it once with [`add_ranking`](Profile::add_ranking) /
/// [`add_scored`](Profile::add_scored); aggregation methods never mutate it.
/// Derived profiles used for probing are fresh values.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Profile {
    names: Vec<String>,
    ballots: Vec<Ballot>,
}

impl Profile {
    pub fn new() -> Self {
        Profile { names: Vec::new(), ballots: Vec::new() }
    }

    /// A profile with the candidate set declared up front, so candidate
    /// order does not depend on the order ballots happen to arrive in.
    pub fn with_candidates<S: AsRef<str>>(candidates: &[S]) -> Result<Self, InvalidProfile> {
        let mut names: Vec<String> = Vec::with_capacity(candidates.len());
        for name in candidates {
            let name = name.as_ref();
            if names.iter().any(|n| n == name) {
                return Err(InvalidProfile::Duplicate(name.to_owned()));
            }
            names.push(name.to_owned());
        }
        Ok(Profile { names, ballots: Vec::new() })
    }

    /// Number of candidates seen so far.
    pub fn candidates(&self) -> usize {
        self.names.len()
    }

    /// Number of ballots.
    pub fn voters(&self) -> usize {
        self.ballots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ballots.is_empty()
    }

    /// The name candidate `c` was first seen under.
    ///
    /// Panics if `c` is out of bounds.
    pub fn name(&self, c: usize) -> &str {
        &self.names[c]
    }

    /// The index of the candidate called `name`, if any ballot mentioned it.
    pub fn candidate(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn ballots(&self) -> &[Ballot] {
        &self.ballots
    }

    /// Add one ranked ballot, interning any new candidate names.
    pub fn add_ranking<S: AsRef<str>>(&mut self, ranking: &[S]) -> Result<(), InvalidProfile> {
        if ranking.is_empty() {
            return Err(InvalidProfile::EmptyBallot);
        }
        for (i, name) in ranking.iter().enumerate() {
            if ranking[..i].iter().any(|m| m.as_ref() == name.as_ref()) {
                return Err(InvalidProfile::Duplicate(name.as_ref().to_owned()));
            }
        }
        let order = ranking.iter().map(|name| self.intern(name.as_ref())).collect();
        self.ballots.push(Ballot::Ranking(order));
        Ok(())
    }

    /// Add one scored ballot, interning any new candidate names.
    pub fn add_scored<S: AsRef<str>>(&mut self, scores: &[(S, usize)]) -> Result<(), InvalidProfile> {
        if scores.is_empty() {
            return Err(InvalidProfile::EmptyBallot);
        }
        for (i, (name, _)) in scores.iter().enumerate() {
            if scores[..i].iter().any(|(m, _)| m.as_ref() == name.as_ref()) {
                return Err(InvalidProfile::Duplicate(name.as_ref().to_owned()));
            }
        }
        let pairs = scores.iter().map(|(name, s)| (self.intern(name.as_ref()), *s)).collect();
        self.ballots.push(Ballot::Scored(pairs));
        Ok(())
    }

    fn intern(&mut self, name: &str) -> usize {
        match self.names.iter().position(|n| n == name) {
            Some(c) => c,
            None => {
                self.names.push(name.to_owned());
                self.names.len() - 1
            }
        }
    }

    /// All ballots as rankings. Errors on an empty profile or a scored
    /// ballot; partial rankings pass.
    pub(crate) fn rankings(&self) -> Result<Vec<&[usize]>, InvalidProfile> {
        if self.ballots.is_empty() {
            return Err(InvalidProfile::Empty);
        }
        self.ballots
            .iter()
            .map(|b| match b {
                Ballot::Ranking(order) => Ok(order.as_slice()),
                Ballot::Scored(_) => Err(InvalidProfile::ExpectedRanking),
            })
            .collect()
    }

    /// Like [`rankings`](Profile::rankings), but every ballot must rank the
    /// whole candidate set.
    pub(crate) fn complete_rankings(&self) -> Result<Vec<&[usize]>, InvalidProfile> {
        let rankings = self.rankings()?;
        let expected = self.candidates();
        for ranking in &rankings {
            // Entries are distinct, so a complete ranking is exactly one
            // entry per candidate.
            if ranking.len() != expected {
                return Err(InvalidProfile::Incomplete { listed: ranking.len(), expected });
            }
        }
        Ok(rankings)
    }

    /// All ballots as score lists. Errors on an empty profile or a ranking.
    pub(crate) fn scored(&self) -> Result<Vec<&[(usize, usize)]>, InvalidProfile> {
        if self.ballots.is_empty() {
            return Err(InvalidProfile::Empty);
        }
        self.ballots
            .iter()
            .map(|b| match b {
                Ballot::Scored(pairs) => Ok(pairs.as_slice()),
                Ballot::Ranking(_) => Err(InvalidProfile::ExpectedScores),
            })
            .collect()
    }

    /// A copy of this profile with one synthetic ranked ballot appended.
    /// `order` must hold distinct, in-bounds candidate indices.
    pub(crate) fn with_ranking(&self, order: Vec<usize>) -> Profile {
        debug_assert!(order.iter().all(|&c| c < self.candidates()));
        let mut derived = self.clone();
        derived.ballots.push(Ballot::Ranking(order));
        derived
    }

    /// A rewritten profile over the same candidate set.
    pub(crate) fn from_parts(names: Vec<String>, ballots: Vec<Ballot>) -> Profile {
        Profile { names, ballots }
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }
}

// Does `ranking` place `a` strictly above `b`? A listed candidate beats an
// unlisted one; two unlisted candidates are incomparable.
pub(crate) fn ranks_above(ranking: &[usize], a: usize, b: usize) -> bool {
    let pos_a = ranking.iter().position(|&c| c == a);
    let pos_b = ranking.iter().position(|&c| c == b);
    match (pos_a, pos_b) {
        (Some(i), Some(j)) => i < j,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
