//! Partial-ratio similarity
//!
//! `ratio` is the matching-blocks similarity `2 * M / (|a| + |b|)`, where
//! `M` is the total size of the maximal matching blocks found by repeatedly
//! taking the longest common run, scaled to 0-100 and rounded half to even.
//!
//! `partial_ratio` anchors one window of the longer string per matching
//! block, at `block.b - block.a`, with the length of the shorter string.
//! Windows near the end of the longer string are cut short, so an SSID that
//! only shares its tail with a watch term still scores high.
//!
//! Works on `char`s, not bytes. Callers handle case folding.

// ============================================================================
// MATCHING BLOCKS
// ============================================================================

/// A common run: `a[a..a + size] == b[b..b + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Block {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Longest common run inside `a[alo..ahi]` and `b[blo..bhi]`.
/// Ties go to the run that ends first in `a`, then first in `b`.
fn longest_match(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block { a: alo, b: blo, size: 0 };
    // run length ending at b[j] is stored at j - blo + 1
    let mut prev = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        let mut curr = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = prev[j - blo] + 1;
                curr[j - blo + 1] = k;
                if k > best.size {
                    best = Block { a: i + 1 - k, b: j + 1 - k, size: k };
                }
            }
        }
        prev = curr;
    }

    best
}

/// Non-overlapping matching blocks in order, adjacent runs merged, ending
/// with the zero-size sentinel `(|a|, |b|, 0)`
pub fn matching_blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut found = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_match(a, b, alo, ahi, blo, bhi);
        if block.size == 0 {
            continue;
        }
        found.push(block);
        if alo < block.a && blo < block.b {
            pending.push((alo, block.a, blo, block.b));
        }
        if block.a + block.size < ahi && block.b + block.size < bhi {
            pending.push((block.a + block.size, ahi, block.b + block.size, bhi));
        }
    }
    found.sort();

    let mut merged: Vec<Block> = Vec::with_capacity(found.len() + 1);
    for block in found {
        match merged.last_mut() {
            Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                last.size += block.size;
            }
            _ => merged.push(block),
        }
    }
    merged.push(Block { a: a.len(), b: b.len(), size: 0 });
    merged
}

// ============================================================================
// SCORES
// ============================================================================

/// Similarity of two whole strings, 0-100. Equal strings score 100, any
/// other pair with an empty side scores 0.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    to_score(block_ratio(&a, &b))
}

/// Best block-anchored similarity of the shorter string against the
/// longer one, 0-100. Empty input scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() || b.is_empty() {
        return 0;
    }
    if a == b {
        return 100;
    }

    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut best = 0.0f64;
    for block in matching_blocks(shorter, longer) {
        let start = block.b.saturating_sub(block.a);
        let end = (start + shorter.len()).min(longer.len());

        let score = block_ratio(shorter, &longer[start..end]);
        if score > 0.995 {
            return 100;
        }
        best = best.max(score);
    }

    to_score(best)
}

/// `2 * M / T` in 0.0-1.0
fn block_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = matching_blocks(a, b).iter().map(|block| block.size).sum();
    (2 * matched) as f64 / total as f64
}

fn to_score(ratio: f64) -> u8 {
    (100.0 * ratio).round_ties_even().clamp(0.0, 100.0) as u8
}
