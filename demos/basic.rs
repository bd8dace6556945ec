// Example: minimal usage with a fixed-size list.
use position_index::{FixedSize, PositionIndex, PositionIndexError};

fn main() -> Result<(), PositionIndexError> {
    let mut index = PositionIndex::new(1_000_000, FixedSize(20.0), 20.0)?;
    println!("total_size={}", index.total_size());

    let Some(window) = index.rendered_window(123_456.0, 400.0, 4)? else {
        return Ok(());
    };
    println!("window {window}");
    println!("measured={}", index.measured_len());

    index.for_each_item_in(window.range(), |i, item| {
        if i == window.start {
            println!("first mounted item: index={i} offset={} size={}", item.offset, item.size);
        }
    })?;
    Ok(())
}
