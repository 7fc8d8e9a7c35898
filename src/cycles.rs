//! Searching a profile for majority cycles, the loops behind Condorcet's
//! paradox.

use tracing::trace;

use crate::methods::Method;
use crate::profile::{ranks_above, InvalidProfile, Profile};

/// Look for a majority cycle among the candidates of `profile`.
///
/// Pairs with a strict pairwise majority form the edges of a defeat graph,
/// and any directed loop in it is a cycle. An exactly tied pair has no
/// majority either way; such pairs are probed empirically instead, by
/// appending a synthetic two-candidate ballot to a derived profile and
/// re-running `method` on it. The probe therefore depends on `method`'s tie
/// behaviour: two methods may disagree on whether a tied pair hides a
/// cycle. The caller's profile is never modified.
///
/// Returns the candidates of the first cycle found, or `None`.
pub fn majority_cycle(
    profile: &Profile,
    method: Method,
) -> Result<Option<Vec<usize>>, InvalidProfile> {
    let rankings = profile.rankings()?;
    let n = profile.candidates();
    // wins[a * n + b] = ballots preferring a to b
    let mut wins = vec![0; n * n];
    for ranking in &rankings {
        for a in 0..n {
            for b in 0..n {
                if a != b && ranks_above(ranking, a, b) {
                    wins[a * n + b] += 1;
                }
            }
        }
    }

    // Tied pairs first: no majority either way, so any loop through them
    // only shows up in the method's behaviour.
    for a in 0..n {
        for b in (a + 1)..n {
            if wins[a * n + b] == wins[b * n + a] {
                if let Some(cycle) = probe(profile, method, a, &[b])? {
                    return Ok(Some(cycle));
                }
            }
        }
    }

    // Otherwise walk the strict-majority digraph.
    let mut edges = vec![false; n * n];
    for a in 0..n {
        for b in 0..n {
            edges[a * n + b] = a != b && wins[a * n + b] > wins[b * n + a];
        }
    }
    for start in 0..n {
        if let Some(cycle) = walk(&edges, n, &[start]) {
            trace!(?cycle, "found loop in the majority graph");
            return Ok(Some(cycle));
        }
    }
    Ok(None)
}

// Probe a tied pair: depth-first from `start`, extending a copy of the path
// on every branch so sibling branches never see each other's visits. For
// each opponent of the node at the end of the path, a derived profile with
// the synthetic ballot [start, opponent] is put to `method`; electing the
// current node closes a loop back through `start`. An opponent already on
// the path closes the path segment instead.
fn probe(
    profile: &Profile,
    method: Method,
    start: usize,
    path: &[usize],
) -> Result<Option<Vec<usize>>, InvalidProfile> {
    let current = *path.last().unwrap();
    for opponent in opponents(profile, current)? {
        if opponent == start {
            continue;
        }
        let derived = profile.with_ranking(vec![start, opponent]);
        let elected = method.apply(&derived)?;
        trace!(start, current, opponent, ?elected, "probed tied pair with a synthetic ballot");
        if elected == Some(current) {
            return Ok(Some(vec![current, start]));
        }
        if let Some(i) = path.iter().position(|&c| c == opponent) {
            return Ok(Some(path[i..].to_vec()));
        }
        let mut extended = path.to_vec();
        extended.push(opponent);
        if let Some(cycle) = probe(profile, method, start, &extended)? {
            return Ok(Some(cycle));
        }
    }
    Ok(None)
}

// The candidates facing `candidate` at the top of some ballot: the ballot's
// top-ranked candidate, or the runner-up on ballots `candidate` itself
// tops. Discovery order, deduplicated.
fn opponents(profile: &Profile, candidate: usize) -> Result<Vec<usize>, InvalidProfile> {
    let mut found = Vec::new();
    for ranking in profile.rankings()? {
        let rival = match ranking.iter().position(|&c| c == candidate) {
            Some(0) => ranking.get(1).copied(),
            Some(_) => Some(ranking[0]),
            None => None,
        };
        if let Some(r) = rival {
            if !found.contains(&r) {
                found.push(r);
            }
        }
    }
    Ok(found)
}

// Depth-first walk over the defeat graph; a node already on the path closes
// the loop. Same copy-on-branch discipline as `probe`.
fn walk(edges: &[bool], n: usize, path: &[usize]) -> Option<Vec<usize>> {
    let current = *path.last().unwrap();
    for next in 0..n {
        if !edges[current * n + next] {
            continue;
        }
        if let Some(i) = path.iter().position(|&c| c == next) {
            return Some(path[i..].to_vec());
        }
        let mut extended = path.to_vec();
        extended.push(next);
        if let Some(cycle) = walk(edges, n, &extended) {
            return Some(cycle);
        }
    }
    None
}
