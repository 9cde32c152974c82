//! Visible-window extraction: display-sized crops of the scroll canvas.
//!
//! The window at a given position is a contiguous crop when it fits, or
//! two crops stitched across the wrap boundary when it does not. Either
//! way the output is exactly display-sized, so the display driver never
//! sees a partial frame.

use crate::buffer::PixelBuffer;

/// Extract the display-sized window at `position`.
///
/// `position` is truncated to whole pixels; sub-pixel progress shows up
/// on the next whole-pixel step. When the window straddles the canvas
/// end, the tail of the canvas and its head are stitched together into
/// one seamless frame.
///
/// A position at or past the canvas end can only come from a caller
/// bypassing [`ScrollState`](crate::scroll::ScrollState) normalization;
/// it falls back to the canvas head rather than failing.
pub fn visible_window(
    buffer: &PixelBuffer,
    position: f64,
    display_width: u32,
    display_height: u32,
) -> PixelBuffer {
    let mut out = PixelBuffer::new(display_width, display_height);

    let mut start = position.floor() as u32;
    if start >= buffer.width() {
        start = 0;
    }

    if u64::from(start) + u64::from(display_width) <= u64::from(buffer.width()) {
        out.blit_region(buffer, start, 0, display_width, display_height, 0, 0);
    } else {
        let part1 = buffer.width() - start;
        out.blit_region(buffer, start, 0, part1, display_height, 0, 0);
        out.blit_region(
            buffer,
            0,
            0,
            display_width - part1,
            display_height,
            part1,
            0,
        );
    }

    out
}
