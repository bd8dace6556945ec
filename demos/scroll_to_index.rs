// Example: computing scroll offsets for every alignment.
use position_index::{Align, PositionIndex, PositionIndexError, SizeList};

fn main() -> Result<(), PositionIndexError> {
    let sizes = SizeList(vec![10.0, 20.0, 10.0, 30.0, 10.0]);
    let mut index = PositionIndex::new(5, sizes, 10.0)?;

    for align in [Align::Start, Align::Center, Align::End, Align::Auto] {
        let offset = index.updated_offset_for_index(align, 25.0, 0.0, 3)?;
        println!("{align:?}: offset={offset}");
    }

    match index.updated_offset_for_index(Align::Start, 25.0, 0.0, 9) {
        Ok(offset) => println!("unexpected offset={offset}"),
        Err(err) => println!("error: {err}"),
    }
    Ok(())
}
