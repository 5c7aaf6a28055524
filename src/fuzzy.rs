// SPDX-License-Identifier: Apache-2.0

//! Bounded edit distance for typo-tolerant code matching.
//!
//! Two exits keep the common case cheap. The length difference of the two
//! strings is a lower bound on their edit distance, so a mismatch there
//! rejects before the DP allocates anything. Inside the DP, row minima
//! never decrease, so the computation stops the moment an entire row sits
//! above the bound.
//!
//! A buyer typing "1234578" for code "12345678" is one deletion away and
//! should still find it.

/// Keywords shorter than this never fuzzy-match (too many false positives
/// on short strings).
pub const MIN_FUZZY_KEYWORD_LEN: usize = 4;

/// Edit-distance tolerance for a keyword of the given length: 40% of the
/// length, rounded up. Length 4-5 tolerates 2 edits, length 10 tolerates 4.
#[inline]
pub fn max_edit_distance(keyword_len: usize) -> usize {
    (keyword_len * 2).div_ceil(5)
}

/// Edit distance between `a` and `b`, if it is at most `max`.
///
/// Unit-cost insertions, deletions, and substitutions over chars (not
/// bytes), computed with a single reused row. Symmetric in `a` and `b`.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let query: Vec<char> = a.chars().collect();
    let target: Vec<char> = b.chars().collect();

    if query.len().abs_diff(target.len()) > max {
        return None;
    }

    let mut row: Vec<usize> = (0..=target.len()).collect();
    for (i, &qc) in query.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut best = row[0];

        for (j, &tc) in target.iter().enumerate() {
            let substitute = diagonal + usize::from(qc != tc);
            let insert = row[j] + 1;
            let delete = row[j + 1] + 1;
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(insert).min(delete);
            best = best.min(row[j + 1]);
        }

        // Row minimum already past the bound: no suffix can recover
        if best > max {
            return None;
        }
    }

    let distance = row[target.len()];
    (distance <= max).then_some(distance)
}
