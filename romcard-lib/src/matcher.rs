//! Fuzzy name matching between game files and cover-art images.
//!
//! The score counts, for each token of the first name, whether any token
//! of the second name equals it or contains it or is contained by it.
//! The scan is one-directional (first name's tokens drive the loop) and
//! must stay that way: association decisions depend on the exact score,
//! and symmetrizing it would change which image claims which game.

use std::collections::HashSet;

/// Split a name into lowercase alphanumeric runs of length >= 2.
///
/// Everything else (punctuation, spaces, single characters) is noise:
/// `"Super Mario Bros (E)"` tokenizes to `{super, mario, bros}`.
pub fn tokenize(name: &str) -> HashSet<String> {
    let lower = name.to_lowercase();
    let mut tokens = HashSet::new();
    let mut current = String::new();
    for c in lower.chars() {
        if c.is_ascii_alphanumeric() {
            current.push(c);
        } else if current.len() >= 2 {
            tokens.insert(std::mem::take(&mut current));
        } else {
            current.clear();
        }
    }
    if current.len() >= 2 {
        tokens.insert(current);
    }
    tokens
}

/// Similarity score between a game file stem and an image stem.
///
/// For every token of `rom_name`, the first token of `img_name` that is
/// equal to it, a substring of it, or a superstring of it scores one
/// point. Image tokens may be hit by several game tokens; there is no
/// cross-token reuse accounting. Returns 0 if either side has no tokens.
pub fn match_score(rom_name: &str, img_name: &str) -> usize {
    let rom_tokens = tokenize(rom_name);
    let img_tokens = tokenize(img_name);
    if rom_tokens.is_empty() || img_tokens.is_empty() {
        return 0;
    }
    let mut score = 0;
    for rt in &rom_tokens {
        for it in &img_tokens {
            if rt == it || it.contains(rt.as_str()) || rt.contains(it.as_str()) {
                score += 1;
                break;
            }
        }
    }
    score
}
