use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }
}

fn assert_non_decreasing(bottoms: &[u64]) {
    for w in bottoms.windows(2) {
        assert!(w[0] <= w[1], "bottoms must be non-decreasing: {w:?}");
    }
}

/// Reference cumulative bottoms for a slice of whole-pixel heights.
fn expected_bottoms(heights: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(heights.len());
    let mut sum = 0u64;
    for &h in heights {
        sum += h;
        out.push(sum);
    }
    out
}

fn ledger_from_heights(heights: &[f64]) -> HeightLedger {
    let mut ledger = HeightLedger::new();
    let changed = ledger.remeasure(RenderRange::new(0, heights.len()), |i| heights[i]);
    assert!(changed || heights.is_empty());
    ledger
}

// ---------------------------------------------------------------------------
// Height Ledger
// ---------------------------------------------------------------------------

#[test]
fn first_measurement_builds_cumulative_bottoms() {
    let ledger = ledger_from_heights(&[40.0, 40.0, 25.0]);
    assert_eq!(ledger.bottoms(), &[40, 80, 105]);
    assert_eq!(ledger.rendered_height(), 105);
    assert_eq!(ledger.len(), 3);
}

#[test]
fn remeasure_round_trip_with_unchanged_heights_reports_no_change() {
    let heights = [40.0, 12.0, 33.0, 40.0, 7.0];
    let mut ledger = ledger_from_heights(&heights);
    let before = ledger.bottoms().to_vec();

    let changed = ledger.remeasure(RenderRange::new(0, heights.len()), |i| heights[i]);
    assert!(!changed);
    assert_eq!(ledger.bottoms(), before.as_slice());
}

#[test]
fn row_height_change_shifts_every_following_bottom() {
    // 30 measured rows of 40px, but only [0, 20) currently rendered: rows 20.. are stale
    // entries that must be shifted, not re-measured.
    let mut heights = [40.0f64; 30];
    let mut ledger = ledger_from_heights(&heights);

    heights[5] = 60.0;
    let changed = ledger.remeasure(RenderRange::new(0, 20), |i| heights[i]);
    assert!(changed);

    let expected: Vec<u64> =
        expected_bottoms(&heights.map(|h| h as u64));
    assert_eq!(ledger.bottoms(), expected.as_slice());
    // Spot-check: bottoms[5..] each grew by 20.
    assert_eq!(ledger.bottoms()[4], 200);
    assert_eq!(ledger.bottoms()[5], 260);
    assert_eq!(ledger.bottoms()[19], 820);
    assert_eq!(ledger.bottoms()[29], 1220);
    assert_non_decreasing(ledger.bottoms());
}

#[test]
fn shrinking_row_shifts_tail_down_without_underflow() {
    let mut heights = [50.0f64; 10];
    let mut ledger = ledger_from_heights(&heights);

    heights[0] = 10.0;
    let changed = ledger.remeasure(RenderRange::new(0, 4), |i| heights[i]);
    assert!(changed);
    assert_eq!(ledger.bottoms()[0], 10);
    assert_eq!(ledger.bottoms()[9], 460);
    assert_non_decreasing(ledger.bottoms());
}

#[test]
fn remeasure_appends_rows_past_the_measured_end() {
    let heights = [40.0f64; 25];
    let mut ledger = ledger_from_heights(&heights[..10]);
    assert_eq!(ledger.len(), 10);

    let changed = ledger.remeasure(RenderRange::new(0, 25), |i| heights[i]);
    assert!(changed);
    assert_eq!(ledger.len(), 25);
    assert_eq!(ledger.rendered_height(), 1000);
}

#[test]
fn remeasure_within_a_sub_range_only_measures_that_range() {
    let mut ledger = ledger_from_heights(&[40.0; 20]);
    let changed = ledger.remeasure(RenderRange::new(5, 15), |i| {
        assert!((5..15).contains(&i), "measured outside the requested range: {i}");
        40.0
    });
    assert!(!changed);
}

#[test]
fn subpixel_jitter_below_one_pixel_is_not_a_change() {
    let mut ledger = ledger_from_heights(&[40.2, 40.7, 40.0]);
    assert_eq!(ledger.bottoms(), &[40, 80, 120]);

    // Layout drift under 1px floors to the same whole-pixel heights.
    let changed = ledger.remeasure(RenderRange::new(0, 3), |i| [40.9, 40.1, 40.99][i]);
    assert!(!changed);
}

#[test]
fn negative_and_non_finite_heights_clamp_to_zero() {
    let ledger = ledger_from_heights(&[-5.0, 40.0, f64::NAN, 10.0]);
    assert_eq!(ledger.bottoms(), &[0, 40, 40, 50]);
    assert_non_decreasing(ledger.bottoms());
}

#[test]
fn bottoms_stay_non_decreasing_under_random_measurements() {
    let mut rng = Lcg::new(0x5eed);
    let mut ledger = HeightLedger::new();
    let mut heights = Vec::new();

    for _ in 0..200 {
        // Grow the data set, then remeasure a random rendered window ending at the edge.
        for _ in 0..rng.gen_range_usize(1, 8) {
            heights.push(rng.gen_range_u64(0, 120) as f64);
        }
        let end = heights.len();
        let start = rng.gen_range_usize(0, ledger.len().min(end - 1) + 1);

        // Occasionally resize rows inside the window.
        if rng.gen_range_usize(0, 3) == 0 {
            let i = rng.gen_range_usize(start, end);
            heights[i] = rng.gen_range_u64(0, 200) as f64;
        }

        ledger.remeasure(RenderRange::new(start, end), |i| heights[i]);
        assert_non_decreasing(ledger.bottoms());
        assert!(ledger.len() <= heights.len());
    }
}

#[test]
fn clear_drops_all_measurements() {
    let mut ledger = ledger_from_heights(&[40.0; 5]);
    ledger.clear();
    assert!(ledger.is_empty());
    assert_eq!(ledger.rendered_height(), 0);
    assert_eq!(ledger.top_of(3), 0);
}

#[test]
fn top_of_returns_cumulative_height_before_the_range_start() {
    let ledger = ledger_from_heights(&[40.0, 40.0, 40.0, 40.0]);
    assert_eq!(ledger.top_of(0), 0);
    assert_eq!(ledger.top_of(2), 80);
    // Start at or past the measured end has no meaningful transform.
    assert_eq!(ledger.top_of(4), 0);
}

// ---------------------------------------------------------------------------
// Scroll Mapper
// ---------------------------------------------------------------------------

#[test]
fn empty_ledger_maps_to_empty_range() {
    assert_eq!(mapper::locate(&[], -123, 400), RenderRange::EMPTY);
}

#[test]
fn fifty_rows_of_forty_px_in_a_400px_viewport() {
    let ledger = ledger_from_heights(&[40.0; 50]);
    let visible = mapper::locate(ledger.bottoms(), 0, 400);
    assert_eq!(visible, RenderRange::new(0, 10));
}

#[test]
fn raw_offset_is_inverted_for_reverse_flow() {
    let ledger = ledger_from_heights(&[40.0; 50]);
    // Scrolled back 400px: rows 10..20 fill the viewport, row 9 touches its far edge.
    let visible = mapper::locate(ledger.bottoms(), -400, 400);
    assert_eq!(visible, RenderRange::new(9, 20));
    // A positive raw offset (elastic overscroll past the anchored end) clamps to the start.
    assert_eq!(
        mapper::locate(ledger.bottoms(), 35, 400),
        mapper::locate(ledger.bottoms(), 0, 400)
    );
}

#[test]
fn locate_is_idempotent() {
    let ledger = ledger_from_heights(&[13.0, 55.0, 8.0, 40.0, 40.0, 72.0]);
    let a = mapper::locate(ledger.bottoms(), -60, 100);
    let b = mapper::locate(ledger.bottoms(), -60, 100);
    assert_eq!(a, b);
}

#[test]
fn offset_past_all_measured_rows_stops_at_the_ledger_end() {
    let ledger = ledger_from_heights(&[40.0; 10]);
    let visible = mapper::locate(ledger.bottoms(), -1000, 400);
    assert_eq!(visible, RenderRange::new(10, 10));
}

#[test]
fn effective_top_inverts_and_clamps() {
    assert_eq!(mapper::effective_top(0), 0);
    assert_eq!(mapper::effective_top(-250), 250);
    assert_eq!(mapper::effective_top(17), 0);
    assert_eq!(mapper::effective_top(i64::MIN), 1 << 63);
}

// ---------------------------------------------------------------------------
// Range Planner
// ---------------------------------------------------------------------------

fn planner() -> RangePlanner {
    RangePlanner::new(WindowOptions::default()).unwrap()
}

#[test]
fn options_reject_zero_chunk_and_overscroll() {
    assert_eq!(
        WindowOptions::default().with_chunk(0).validate(),
        Err(OptionsError::ZeroChunk)
    );
    assert_eq!(
        WindowOptions::default().with_overscroll(0).validate(),
        Err(OptionsError::ZeroOverscroll)
    );
    assert!(RangePlanner::new(WindowOptions::default().with_chunk(0)).is_err());
    assert!(WindowOptions::default().with_shift_gap(0).with_load_gap(0).validate().is_ok());
}

#[test]
fn shrinking_data_resets_ledger_and_range() {
    let mut ledger = ledger_from_heights(&[40.0; 30]);
    let mut p = planner();
    p.sync_data_len(&mut ledger, 30);
    p.validate(&ledger, 400, 30, false);
    assert!(!p.range().is_empty());

    assert!(p.sync_data_len(&mut ledger, 12));
    assert_eq!(p.range(), RenderRange::EMPTY);
    assert!(ledger.is_empty());
}

#[test]
fn moderate_shrink_clamps_the_range_without_reset() {
    let mut ledger = ledger_from_heights(&[40.0; 5]);
    let mut p = planner();
    p.sync_data_len(&mut ledger, 40);
    p.validate(&ledger, 400, 40, false); // range end -> 20

    // 40 -> 12 is still >= the 5 measured rows: clamp, no reset.
    assert!(!p.sync_data_len(&mut ledger, 12));
    assert_eq!(p.range().end, 12);
    assert_eq!(ledger.len(), 5);
}

#[test]
fn validate_extends_by_a_full_chunk_when_data_is_plentiful() {
    let ledger = HeightLedger::new();
    let mut p = planner();
    let outcome = p.validate(&ledger, 400, 100, false);
    assert!(outcome.extended);
    assert_eq!(outcome.load_more, None);
    assert_eq!(p.range(), RenderRange::new(0, 20));
}

#[test]
fn capped_extension_also_requests_more_data() {
    let ledger = HeightLedger::new();
    let mut p = planner();
    let outcome = p.validate(&ledger, 400, 12, false);
    assert!(outcome.extended);
    assert_eq!(outcome.load_more, Some(12));
    assert_eq!(p.range(), RenderRange::new(0, 12));
}

#[test]
fn exhausted_data_requests_more_without_extension() {
    let mut ledger = ledger_from_heights(&[40.0; 12]);
    let mut p = planner();
    p.sync_data_len(&mut ledger, 12);
    p.validate(&ledger, 700, 12, false); // capped extension to 12

    let outcome = p.validate(&ledger, 700, 12, false);
    assert!(!outcome.extended);
    assert_eq!(outcome.load_more, Some(12));
}

#[test]
fn empty_data_requests_a_load_on_every_pass_until_data_arrives() {
    let ledger = HeightLedger::new();
    let mut p = planner();
    for _ in 0..3 {
        let outcome = p.validate(&ledger, 400, 0, false);
        assert_eq!(outcome.load_more, Some(0));
        assert!(!outcome.extended);
        assert_eq!(p.range(), RenderRange::EMPTY);
    }
}

#[test]
fn loading_suppresses_extension_and_load_requests() {
    let ledger = HeightLedger::new();
    let mut p = planner();
    assert!(p.validate(&ledger, 400, 100, true).is_none());
    assert_eq!(p.range(), RenderRange::EMPTY);
}

#[test]
fn far_rendered_bottom_does_not_trigger_loading() {
    // 40 rows of 40px rendered; viewport bottom at 400px, range bottom at 1600px.
    let mut ledger = ledger_from_heights(&[40.0; 40]);
    let mut p = planner();
    p.sync_data_len(&mut ledger, 100);
    p.validate(&ledger, 2000, 100, false);
    p.validate(&ledger, 2000, 100, false);
    assert_eq!(p.range().end, 40);

    assert!(p.validate(&ledger, 400, 100, false).is_none());
}

#[test]
fn range_bottom_within_load_gap_of_visible_bottom_triggers_extension() {
    // Range bottom at 420px, visible bottom at 400px: 20px away, inside the 30px gap.
    let mut ledger = ledger_from_heights(&[42.0; 10]);
    let mut p = planner();
    p.sync_data_len(&mut ledger, 10);
    p.validate(&ledger, 700, 10, false); // grow range over the measured rows first
    assert_eq!(p.range().end, 10);

    let outcome = p.validate(&ledger, 400, 100, false);
    assert!(outcome.extended);
    assert_eq!(p.range().end, 30);
}

#[test]
fn reposition_pads_the_visible_window_with_overscroll() {
    let mut p = planner();
    let mut ledger = HeightLedger::new();
    p.sync_data_len(&mut ledger, 1000);

    assert!(p.reposition(RenderRange::new(40, 52), 1000, false));
    assert_eq!(p.range(), RenderRange::new(30, 62));
}

#[test]
fn reposition_clamps_at_data_bounds() {
    let mut p = planner();
    assert!(p.reposition(RenderRange::new(0, 8), 12, false));
    assert_eq!(p.range(), RenderRange::new(0, 12));
}

#[test]
fn reposition_is_a_no_op_while_the_visible_window_stays_inside() {
    let mut p = planner();
    let mut ledger = HeightLedger::new();
    p.sync_data_len(&mut ledger, 1000);
    assert!(p.reposition(RenderRange::new(40, 52), 1000, false));
    let range = p.range();

    // Well inside [30, 62) and clear of the shift gap.
    assert!(!p.reposition(RenderRange::new(42, 50), 1000, false));
    assert_eq!(p.range(), range);
}

#[test]
fn shift_gap_triggers_an_early_reposition() {
    let mut p = planner();
    let mut ledger = HeightLedger::new();
    p.sync_data_len(&mut ledger, 1000);
    assert!(p.reposition(RenderRange::new(40, 52), 1000, false));

    // Visible end 60 is within shift_gap(3) of the rendered end 62.
    assert!(p.reposition(RenderRange::new(48, 60), 1000, false));
    assert_eq!(p.range(), RenderRange::new(38, 70));
}

#[test]
fn at_scroll_end_forces_a_pass_even_when_the_range_is_unchanged() {
    let mut p = planner();
    // Visible [0, 2) in a 12-row data set: padded range is [0, 12), same both times.
    assert!(p.reposition(RenderRange::new(0, 2), 12, false));
    assert!(!p.reposition(RenderRange::new(0, 10), 12, false));
    assert!(p.reposition(RenderRange::new(0, 10), 12, true));
}

#[test]
fn range_stays_within_data_bounds_under_random_planning() {
    let mut rng = Lcg::new(0xa11);
    let mut ledger = HeightLedger::new();
    let mut p = planner();
    let mut data_len = 0usize;

    for _ in 0..500 {
        match rng.gen_range_usize(0, 4) {
            0 => data_len = rng.gen_range_usize(0, 200),
            1 => {
                let s = rng.gen_range_usize(0, 50);
                let e = s + rng.gen_range_usize(0, 30);
                p.reposition(RenderRange::new(s, e), data_len, false);
            }
            2 => {
                p.validate(&ledger, rng.gen_range_u64(0, 2000), data_len, false);
            }
            _ => {
                p.sync_data_len(&mut ledger, data_len);
                let end = p.range().end.min(data_len);
                if end > 0 {
                    ledger.remeasure(RenderRange::new(0, end), |_| 40.0);
                }
            }
        }
        p.sync_data_len(&mut ledger, data_len);
        let r = p.range();
        assert!(r.start <= r.end, "start must not exceed end: {r:?}");
        assert!(r.end <= data_len, "end must not exceed data_len: {r:?} len={data_len}");
    }
}
