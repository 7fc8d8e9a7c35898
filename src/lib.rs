//! Collective choice over ranked and scored ballot profiles.
//!
//! A [`Profile`] gathers one ballot per voter over a shared candidate set.
//! Choosing a [`Method`] turns the profile into at most one winning
//! candidate, and the [`cycles`] and [`criteria`] modules probe how the
//! chosen method behaves on that profile: whether the majorities loop, and
//! whether the method is dictatorial or Pareto efficient there.
//!
//! Example usage:
//! ```
//! use agora::prelude::*;
//!
//! let mut profile = Profile::new();
//! profile.add_ranking(&["spring", "summer", "autumn"]).unwrap();
//! profile.add_ranking(&["summer", "spring", "autumn"]).unwrap();
//! profile.add_ranking(&["spring", "autumn", "summer"]).unwrap();
//!
//! let winner = Method::Plurality.apply(&profile).unwrap();
//! assert_eq!(winner, profile.candidate("spring"));
//! ```
//!
//! Every tie in the crate resolves the same way: the candidate appearing
//! first in the profile wins. Outcomes are therefore deterministic
//! functions of the profile and nothing else.
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod criteria;
pub mod cycles;
pub mod generators;
pub mod methods;
pub mod profile;

/// Commonly used types and traits
pub mod prelude {
    pub use crate::methods::{Method, VotingMethod};
    pub use crate::profile::{Ballot, InvalidProfile, Profile};
}

pub use crate::criteria::{is_dictatorship, is_pareto_efficient};
pub use crate::cycles::majority_cycle;
pub use crate::methods::{Method, VotingMethod};
pub use crate::profile::{Ballot, InvalidProfile, Profile};
