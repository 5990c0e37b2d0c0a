//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`. Case-sensitive; operates on `char`s, not bytes.
///
/// Row `i` of the table is the cost of producing the first `i` chars of `b`
/// from each prefix of `a`. Only the previous row is kept.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (i, bc) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ac) in a.iter().enumerate() {
            let substitution = prev[j] + usize::from(ac != bc);
            let insertion = curr[j] + 1;
            let deletion = prev[j + 1] + 1;
            curr[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}
