//! # Tick Range Planner
//!
//! Computes the tick window used when adding liquidity around a pool's
//! current tick. The window is rounded outward to the fee tier's spacing so it
//! always covers `current ± half_width`, then clamped to the usable ticks.

use num_integer::Integer;

use crate::constants::{MAX_TICK, MIN_TICK};
use crate::errors::{CoreResult, PoolKitError};
use crate::types::{FeeTier, TickWindow};

/// Plan a window from a raw fee as read from the pool contract
pub fn plan(fee: u32, current_tick: i32, range_half_width: u32) -> CoreResult<TickWindow> {
    let tier = FeeTier::try_from(fee)?;
    plan_for_tier(tier, current_tick, range_half_width)
}

/// Plan a window for a resolved fee tier
pub fn plan_for_tier(
    tier: FeeTier,
    current_tick: i32,
    range_half_width: u32,
) -> CoreResult<TickWindow> {
    if !(MIN_TICK..=MAX_TICK).contains(&current_tick) {
        return Err(PoolKitError::TickOutOfRange(current_tick));
    }

    let spacing = i64::from(tier.tick_spacing());
    let current = i64::from(current_tick);
    let half = i64::from(range_half_width);

    let lower = Integer::div_floor(&(current - half), &spacing) * spacing;
    let upper = Integer::div_ceil(&(current + half), &spacing) * spacing;

    // Both land inside the usable range, so they fit in i32
    let tick_lower = lower.max(i64::from(tier.min_usable_tick())) as i32;
    let tick_upper = upper.min(i64::from(tier.max_usable_tick())) as i32;

    if tick_lower >= tick_upper {
        return Err(PoolKitError::DegenerateTickWindow { tick_lower, tick_upper });
    }

    Ok(TickWindow { tick_lower, tick_upper })
}

/// Widest window the fee tier allows
pub fn full_range(tier: FeeTier) -> TickWindow {
    TickWindow {
        tick_lower: tier.min_usable_tick(),
        tick_upper: tier.max_usable_tick(),
    }
}

/// Round a tick down to the spacing grid
pub fn floor_to_spacing(tick: i32, tick_spacing: i32) -> i32 {
    Integer::div_floor(&tick, &tick_spacing) * tick_spacing
}

/// Round a tick up to the spacing grid
pub fn ceil_to_spacing(tick: i32, tick_spacing: i32) -> i32 {
    Integer::div_ceil(&tick, &tick_spacing) * tick_spacing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_RANGE_HALF_WIDTH, WIDE_RANGE_HALF_WIDTH};

    #[test]
    fn test_plan_rounds_outward() {
        // 0.3% tier, spacing 60
        let window = plan(3000, 1000, 120).unwrap();
        assert_eq!(window, TickWindow { tick_lower: 840, tick_upper: 1140 });

        // Negative ticks floor away from zero
        let window = plan(3000, -1000, 120).unwrap();
        assert_eq!(window, TickWindow { tick_lower: -1140, tick_upper: -840 });
    }

    #[test]
    fn test_plan_aligned_tick_is_exact() {
        let window = plan(500, 200, 100).unwrap();
        assert_eq!(window, TickWindow { tick_lower: 100, tick_upper: 300 });
    }

    #[test]
    fn test_presets() {
        let narrow = plan(10000, 0, DEFAULT_RANGE_HALF_WIDTH).unwrap();
        assert_eq!(narrow, TickWindow { tick_lower: -200, tick_upper: 200 });

        let wide = plan(10000, 0, WIDE_RANGE_HALF_WIDTH).unwrap();
        assert_eq!(wide, TickWindow { tick_lower: -1200, tick_upper: 1200 });
    }

    #[test]
    fn test_unknown_fee_tier() {
        assert_eq!(plan(9999, 0, 120), Err(PoolKitError::UnknownFeeTier(9999)));
    }

    #[test]
    fn test_zero_width_on_grid_is_degenerate() {
        assert_eq!(
            plan(3000, 600, 0),
            Err(PoolKitError::DegenerateTickWindow { tick_lower: 600, tick_upper: 600 })
        );
        // Off the grid the same half width still spans one spacing
        assert_eq!(
            plan(3000, 601, 0).unwrap(),
            TickWindow { tick_lower: 600, tick_upper: 660 }
        );
    }

    #[test]
    fn test_clamps_to_usable_ticks() {
        let window = plan(3000, MAX_TICK, 1200).unwrap();
        assert_eq!(window.tick_upper, 887220);
        assert_eq!(window.tick_lower, 886020);

        let window = plan(3000, MIN_TICK, 1200).unwrap();
        assert_eq!(window.tick_lower, -887220);

        let huge = plan(500, 0, u32::MAX).unwrap();
        assert_eq!(huge, full_range(FeeTier::Low));
    }

    #[test]
    fn test_clamping_can_collapse_window() {
        // Pool pinned at MAX_TICK with no width: lower 887220 == usable upper
        assert!(matches!(
            plan(3000, MAX_TICK, 0),
            Err(PoolKitError::DegenerateTickWindow { .. })
        ));
    }

    #[test]
    fn test_tick_out_of_range() {
        assert_eq!(
            plan(3000, MAX_TICK + 1, 120),
            Err(PoolKitError::TickOutOfRange(MAX_TICK + 1))
        );
    }

    #[test]
    fn test_spacing_helpers() {
        assert_eq!(floor_to_spacing(-5, 10), -10);
        assert_eq!(floor_to_spacing(15, 10), 10);
        assert_eq!(ceil_to_spacing(-5, 10), 0);
        assert_eq!(ceil_to_spacing(15, 10), 20);
    }
}
