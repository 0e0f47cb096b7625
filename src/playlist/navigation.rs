//! Selection arithmetic for next/previous/random.
//!
//! These are pure: they take the current selection and the playlist length
//! and return the index to select, or `None` when the playlist is empty.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Index after `current`, wrapping to 0. No selection starts at 0.
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(i) if i + 1 < len => Some(i + 1),
        _ => Some(0),
    }
}

/// Index before `current`, wrapping to the last. No selection starts at the last.
pub fn previous_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(i) if i > 0 && i < len => Some(i - 1),
        _ => Some(len - 1),
    }
}

/// Uniformly random index different from `current`, unless only one exists.
pub fn random_index<R: Rng + ?Sized>(
    current: Option<usize>,
    len: usize,
    rng: &mut R,
) -> Option<usize> {
    match len {
        0 => None,
        1 => Some(0),
        _ => {
            let candidates: Vec<usize> = (0..len).filter(|&i| Some(i) != current).collect();
            candidates.choose(rng).copied()
        }
    }
}
