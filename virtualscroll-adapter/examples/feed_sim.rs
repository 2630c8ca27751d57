// Example: a simulated infinite feed, with pages of data served on demand while the user scrolls.
use std::sync::{Arc, Mutex};

use virtualscroll_adapter::{AdapterOptions, Event, ViewportAdapter};

const PAGE: usize = 25;

fn row_height(index: usize) -> f64 {
    24.0 + ((index * 31) % 48) as f64
}

fn main() {
    let requests: Arc<Mutex<Vec<usize>>> = Arc::default();
    let mut adapter = ViewportAdapter::new(AdapterOptions::new().with_on_load_more(Some({
        let requests = Arc::clone(&requests);
        move |start| requests.lock().unwrap().push(start)
    })))
    .unwrap();

    let mut data_len = 0usize;
    adapter.handle_event(Event::Resized { width: 800, height: 600 }, row_height);
    adapter.handle_event(Event::Mounted, row_height);

    let mut offset = 0i64;
    for tick in 0..30 {
        if let Some(start) = requests.lock().unwrap().drain(..).last() {
            if start == data_len {
                adapter.handle_event(Event::LoadingChanged(true), row_height);
                data_len += PAGE;
                adapter.handle_event(Event::DataChanged { len: data_len }, row_height);
                adapter.handle_event(Event::LoadingChanged(false), row_height);
                println!("tick {tick:02}: fetched page, data_len={data_len}");
            }
        }

        offset -= 180;
        adapter.handle_event(Event::ScrollMoved { offset }, row_height);
    }

    let plan = adapter.render_plan();
    println!(
        "final: range={:?} rows={} translate_y={} content_height={}",
        adapter.range(),
        plan.rows.len(),
        plan.translate_y,
        plan.content_height
    );
}
