//! Shared helpers for N-Step policies: contiguous zone splitting and
//! direction bookkeeping.

use evsim_core::Direction;

/// Split `[1, floors]` into `n` contiguous, near-equal zones.
///
/// Mirrors the source's `split_array` rotation: zone `i` gets
/// `floors / n` entries, plus one extra if `i < floors % n`, with the
/// remainder spread round-robin rather than piled onto the first zones.
pub fn split_floors(floors: u32, n: usize) -> Vec<Vec<u32>> {
    if n == 0 {
        return Vec::new();
    }
    let all: Vec<u32> = (1..=floors).collect();
    let len = all.len();
    let (k, m) = (len / n, len % n);
    (0..n)
        .map(|i| {
            let start = i * k + i.min(m);
            let end = (i + 1) * k + (i + 1).min(m);
            all[start..end].to_vec()
        })
        .collect()
}

/// Recompute the current direction of travel, the way `_calculate_direction`
/// does in the source: derived once from current vs. destination floor.
pub fn calculate_direction(current_floor: u32, destination_floor: u32) -> Option<Direction> {
    Direction::towards(current_floor, destination_floor)
}
