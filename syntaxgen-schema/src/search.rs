//! "Did you mean" lookups for category and definition names.

use strsim::levenshtein;

/// Rank of `candidate` as a correction for `name`, lower is closer.
///
/// A case-only difference ranks 0 and a name that contains the other (`Stmts`
/// for `Stmt`, `Rewriter` for `SyntaxRewriter`) ranks 1. Anything else is its
/// edit distance.
fn rank(name: &str, candidate: &str) -> usize {
    let (name_lower, candidate_lower) = (name.to_lowercase(), candidate.to_lowercase());
    if name_lower == candidate_lower {
        0
    } else if candidate_lower.contains(&name_lower) || name_lower.contains(&candidate_lower) {
        1
    } else {
        levenshtein(name, candidate)
    }
}

/// The candidate closest to a misspelled `name`, if any is within
/// `max_distance`. An exact match is never offered back; ties go to the
/// earliest candidate.
pub fn closest_name(name: &str, candidates: &[&str], max_distance: usize) -> Option<String> {
    candidates
        .iter()
        .filter(|&&candidate| candidate != name)
        .map(|&candidate| (rank(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}
