//! Probes for the classical desirability criteria of an aggregation method:
//! dictatorship and Pareto efficiency.

use crate::methods::Method;
use crate::profile::{ranks_above, Ballot, InvalidProfile, Profile};

/// Does `method` behave dictatorially on `profile`?
///
/// For each candidate d the ballots are rewritten: a ballot listing d
/// collapses to the singleton `[d]`, and a ballot not listing d keeps its
/// ranking and appends the candidates it omits (except d) in
/// first-appearance order. The method "has a dictator" only if it elects d
/// on every d's rewritten profile; the first mismatch settles the question.
///
/// Errors raised by a rewritten profile (a method demanding complete
/// rankings will reject the singletons, for instance) are passed through.
pub fn is_dictatorship(profile: &Profile, method: Method) -> Result<bool, InvalidProfile> {
    let rankings = profile.rankings()?;
    let n = profile.candidates();
    for d in 0..n {
        let ballots = rankings
            .iter()
            .map(|ranking| {
                if ranking.contains(&d) {
                    Ballot::Ranking(vec![d])
                } else {
                    let mut order = ranking.to_vec();
                    order.extend((0..n).filter(|c| *c != d && !ranking.contains(c)));
                    Ballot::Ranking(order)
                }
            })
            .collect();
        let rewritten = Profile::from_parts(profile.names().to_vec(), ballots);
        if method.apply(&rewritten)? != Some(d) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Is `method` Pareto efficient on `profile`?
///
/// For every ordered pair (a, b) that the ballots unanimously rank a above
/// b, the method must elect a from the profile as it stands. The first
/// violated pair settles the question; with no unanimous pair the property
/// holds vacuously. Each unanimous pair re-runs the method once.
pub fn is_pareto_efficient(profile: &Profile, method: Method) -> Result<bool, InvalidProfile> {
    let rankings = profile.rankings()?;
    let n = profile.candidates();
    for a in 0..n {
        for b in 0..n {
            if a == b {
                continue;
            }
            let unanimous = rankings.iter().all(|ranking| ranks_above(ranking, a, b));
            if unanimous && method.apply(profile)? != Some(a) {
                return Ok(false);
            }
        }
    }
    Ok(true)
}
