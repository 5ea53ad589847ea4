//! Similarity scores on a 0-100 scale.

/// Normalized indel similarity: `200 * lcs / (len_a + len_b)`.
pub(crate) fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best [`ratio`] of the shorter string against any window of the longer
/// one, including windows that only partly overlap either end.
pub(crate) fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }

    let best = best_alignment(short, long);
    if short.len() == long.len() && best < 100.0 {
        best.max(best_alignment(long, short))
    } else {
        best
    }
}

fn best_alignment(needle: &[char], haystack: &[char]) -> f64 {
    let n = needle.len();
    let m = haystack.len();
    let mut best: f64 = 0.0;

    let leading = (1..n).map(|end| &haystack[..end]);
    let full = (0..=m - n).map(|start| &haystack[start..start + n]);
    let trailing = (m - n + 1..m).map(|start| &haystack[start..]);

    for window in leading.chain(full).chain(trailing) {
        best = best.max(ratio_chars(needle, window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    200.0 * lcs_len(a, b) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
#[path = "fuzzy_tests.rs"]
mod tests;
