// Example: the three core pieces driven by hand (measure, locate, plan).
use virtualscroll::{HeightLedger, RangePlanner, RenderRange, WindowOptions, mapper};

fn main() {
    let heights = [40.0f64; 50];
    let mut ledger = HeightLedger::new();
    let mut planner = RangePlanner::new(WindowOptions::default()).unwrap();

    // Grow the render range over the loaded rows, measuring as we go.
    planner.sync_data_len(&mut ledger, heights.len());
    loop {
        let outcome = planner.validate(&ledger, 400, heights.len(), false);
        if !outcome.extended {
            break;
        }
        ledger.remeasure(planner.range(), |i| heights[i]);
    }
    println!("range={:?}", planner.range());
    println!("rendered_height={}", ledger.rendered_height());

    // Map a scroll position (reverse flow: raw offsets are negative) back to indices.
    let visible = mapper::locate(ledger.bottoms(), -500, 400);
    println!("visible at -500px: {visible:?}");

    // Scrolling near the rendered edge repositions the range with overscroll.
    if planner.reposition(visible, heights.len(), false) {
        println!("repositioned to {:?}", planner.range());
        ledger.remeasure(planner.range(), |i| heights[i]);
    }

    // A shrinking data set is a full external reset.
    planner.sync_data_len(&mut ledger, 10);
    assert_eq!(planner.range(), RenderRange::EMPTY);
    println!("after reset: measured={}", ledger.len());
}
