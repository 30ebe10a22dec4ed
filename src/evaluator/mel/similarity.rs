//! Sequence-alignment text similarity for fuzzy MEL lookup.
//!
//! Ratio is Ratcliff/Obershelp style: twice the number of aligned characters
//! over the total length of both strings. Pilots report faults in shorthand
//! ("radar out") while the database carries full descriptions ("Weather
//! radar inop"), so the matcher also aligns the shorter string against every
//! same-length window of the longer one and keeps the best ratio.

/// Similarity of two strings in 0..=1.
///
/// Returns 1.0 for two empty strings and 0.0 when only one is empty.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    char_ratio(&a, &b)
}

/// Best similarity of the shorter string against any same-length window of
/// the longer string. Never lower than the plain ratio.
pub fn best_window_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut best = char_ratio(&a, &b);
    if short.is_empty() {
        return best;
    }

    for window in long.windows(short.len()) {
        let r = char_ratio(short, window);
        if r > best {
            best = r;
        }
        if best == 1.0 {
            break;
        }
    }
    best
}

fn char_ratio(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let matched = matching_chars(a, b);
    2.0 * matched as f64 / (a.len() + b.len()) as f64
}

/// Total aligned characters: the longest common block, then recursion on the
/// unmatched pieces to its left and right.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (ai, bi, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..ai], &b[..bi])
        + matching_chars(&a[ai + len..], &b[bi + len..])
}

/// Longest common contiguous block, earliest in `a` on ties.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // lengths of common suffixes ending at the previous row
    let mut prev = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                row[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = row;
    }
    best
}
