// Example: expensive measurements happen once, only for items a query reaches.
use position_index::{PositionIndex, PositionIndexError};

fn main() -> Result<(), PositionIndexError> {
    let mut calls = 0usize;
    let mut index = PositionIndex::new(
        10_000,
        |i: usize| {
            calls += 1;
            // Pretend this is text layout.
            16.0 + (i % 7) as f64 * 4.0
        },
        24.0,
    )?;

    println!("estimated total={}", index.total_size());

    let range = index.visible_range(0.0, 300.0, 2)?;
    println!("first frame range={range:?} measured={}", index.measured_len());

    // Jumping far ahead only measures up to the exponential-search frontier.
    let range = index.visible_range(50_000.0, 300.0, 2)?;
    println!("after jump range={range:?} measured={}", index.measured_len());
    println!("total now={}", index.total_size());

    // Item 3 changed (e.g. it was expanded): drop it and everything after it.
    index.reset_item(3);
    println!("after reset last_measured={:?}", index.last_measured_index());

    drop(index);
    println!("size getter calls={calls}");
    Ok(())
}
