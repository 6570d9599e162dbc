use super::{Origin, Rect};
use crate::Pos;

/// Emits one `cell_size` square per live cell, offset by `origin`
///
/// The returned batch always holds exactly as many rectangles as `live_cells`
/// yields, so the host can fill them all in a single call.
pub fn batch<I>(live_cells: I, cell_size: u32, origin: Origin) -> Vec<Rect>
where
    I: IntoIterator<Item = Pos>,
{
    let size = cell_size as i32;
    live_cells
        .into_iter()
        .map(|pos| {
            Rect::square(
                origin.x + pos.col as i32 * size,
                origin.y + pos.row as i32 * size,
                cell_size,
            )
        })
        .collect()
}

/// Frames a `rows x cols` grid drawn at `origin` with four `cell_size` thick
/// strips lying just outside its bounding box
///
/// Returned in the order top, right, bottom, left. The horizontal strips span
/// the corners, so the frame covers `(cols + 2) x (rows + 2)` cells.
pub fn border(rows: usize, cols: usize, cell_size: u32, origin: Origin) -> [Rect; 4] {
    let size = cell_size as i32;
    let left = origin.x - size;
    let top = origin.y - size;
    let outer_width = (cols as u32 + 2) * cell_size;
    let outer_height = (rows as u32 + 2) * cell_size;

    [
        Rect::new(left, top, outer_width, cell_size),
        Rect::new(left + (cols as i32 + 1) * size, top, cell_size, outer_height),
        Rect::new(left, top + (rows as i32 + 1) * size, outer_width, cell_size),
        Rect::new(left, top, cell_size, outer_height),
    ]
}
