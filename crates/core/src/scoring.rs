//! Scoring module - line-clear points, levels, and gravity speed
//!
//! - A lock that clears `n` lines scores `LINE_SCORES[n] * level`.
//! - The level is `floor(total_lines / 10) + 1`.
//! - Gravity starts at 1000ms per row and speeds up by 100ms per level,
//!   bottoming out at 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, HARD_DROP_POINTS_PER_CELL,
    LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_POINTS, START_LEVEL,
};

/// Points for clearing `lines` rows with a single lock at `level`.
///
/// Anything outside 1-4 lines scores nothing.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level reached after clearing `total_lines` in a session.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval at `level`, in milliseconds.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(START_LEVEL)
        .saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Points for descending `cells` rows, by soft or hard drop.
pub fn drop_points(cells: u32, hard_drop: bool) -> u32 {
    if hard_drop {
        cells.saturating_mul(HARD_DROP_POINTS_PER_CELL)
    } else {
        cells.saturating_mul(SOFT_DROP_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points_level_one() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 1), 300);
        assert_eq!(line_clear_points(3, 1), 500);
        assert_eq!(line_clear_points(4, 1), 800);
    }

    #[test]
    fn test_line_clear_points_scale_with_level() {
        assert_eq!(line_clear_points(1, 2), 200);
        assert_eq!(line_clear_points(4, 2), 1600);
        assert_eq!(line_clear_points(4, 7), 5600);
    }

    #[test]
    fn test_line_clear_points_out_of_range() {
        assert_eq!(line_clear_points(5, 1), 0);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(19), 2);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_drop_interval_ms() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(9), 200);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(500), 100);
    }

    #[test]
    fn test_drop_points() {
        assert_eq!(drop_points(1, false), 1);
        assert_eq!(drop_points(5, true), 10);
        assert_eq!(drop_points(0, true), 0);
    }
}
