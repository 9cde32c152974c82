//! Composite canvas construction.
//!
//! Content arrives as an ordered list of pre-rasterized tiles. The
//! compositor lays them out on one wide canvas, with a leading gap the
//! size of the display so fresh content always enters from off-screen,
//! and gap pixels between tiles. Scrolling then crops against this
//! canvas and wraps at its right edge.

use super::frame::PixelBuffer;
use super::pixel::Rgb;

/// Builds the wide wrap-around canvas from content tiles.
///
/// Layout along the x axis:
///
/// ```text
/// [display-width lead] [tile] [eg] [ig] [eg] [tile] [eg] ... [tile] [eg]
/// ```
///
/// Every tile is followed by one element gap; between tiles there is
/// additionally an item gap plus one more element gap, so `n` tiles
/// carry `2n - 1` element gaps and `n - 1` item gaps.
#[derive(Debug, Clone)]
pub struct Compositor {
    /// Display width in pixels; also the leading gap width.
    display_width: u32,
    /// Display (and canvas) height in pixels.
    display_height: u32,
    /// Extra gap between consecutive tiles.
    item_gap: u32,
    /// Gap following every tile.
    element_gap: u32,
    /// Canvas background color.
    background: Rgb,
}

impl Compositor {
    /// Create a compositor for a display of the given size.
    ///
    /// # Panics
    /// Panics if either display dimension is 0.
    pub fn new(
        display_width: u32,
        display_height: u32,
        item_gap: u32,
        element_gap: u32,
        background: Rgb,
    ) -> Self {
        assert!(
            display_width > 0 && display_height > 0,
            "Display dimensions must be non-zero"
        );
        Self {
            display_width,
            display_height,
            item_gap,
            element_gap,
            background,
        }
    }

    /// Total canvas width for a given set of tile widths.
    pub fn total_width(&self, item_widths: &[u32]) -> u32 {
        let n = item_widths.len() as u32;
        if n == 0 {
            return self.display_width;
        }
        let items: u32 = item_widths.iter().sum();
        self.display_width + items + self.item_gap * (n - 1) + self.element_gap * (2 * n - 1)
    }

    /// Build the canvas from an ordered list of tiles.
    ///
    /// Tiles are placed left to right, vertically centered and clipped
    /// to the display height. An empty list yields a display-sized
    /// background canvas; a blank screen is a valid terminal state, not
    /// an error.
    pub fn compose(&self, items: &[PixelBuffer]) -> PixelBuffer {
        let widths: Vec<u32> = items.iter().map(PixelBuffer::width).collect();
        let total = self.total_width(&widths);
        let mut canvas = PixelBuffer::filled(total, self.display_height, self.background);

        let mut x = self.display_width;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                x += self.element_gap + self.item_gap;
            }
            self.place(&mut canvas, item, x);
            x += item.width() + self.element_gap;
        }

        tracing::debug!(
            items = items.len(),
            total_width = total,
            height = self.display_height,
            "composite canvas rebuilt"
        );
        canvas
    }

    /// Blit one tile at column `x`, centered vertically.
    ///
    /// Tiles taller than the display are cropped around their vertical
    /// middle; shorter tiles float over the background.
    fn place(&self, canvas: &mut PixelBuffer, item: &PixelBuffer, x: u32) {
        let dst_y = self.display_height.saturating_sub(item.height()) / 2;
        let src_y = item.height().saturating_sub(self.display_height) / 2;
        let rows = item.height().min(self.display_height);
        canvas.blit_region(item, 0, src_y, item.width(), rows, x, dst_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compositor() -> Compositor {
        Compositor::new(64, 32, 32, 16, Rgb::OFF)
    }

    #[test]
    fn test_total_width_formula() {
        // display lead 64 + items 100 + item_gap 32 + element_gap 16*3
        assert_eq!(compositor().total_width(&[40, 60]), 244);
    }

    #[test]
    fn test_compose_dimensions() {
        let items = vec![PixelBuffer::new(40, 32), PixelBuffer::new(60, 32)];
        let canvas = compositor().compose(&items);
        assert_eq!(canvas.width(), 244);
        assert_eq!(canvas.height(), 32);
    }

    #[test]
    fn test_compose_empty_is_blank_display() {
        let bg = Rgb::new(0, 0, 40);
        let c = Compositor::new(64, 32, 32, 16, bg);
        let canvas = c.compose(&[]);
        assert_eq!(canvas.width(), 64);
        assert_eq!(canvas.height(), 32);
        assert!(canvas.pixels().iter().all(|&p| p == bg));
    }

    #[test]
    fn test_compose_single_item_placement() {
        let mut tile = PixelBuffer::new(10, 32);
        tile.set(0, 0, Rgb::WHITE);
        let canvas = compositor().compose(&[tile]);

        // lead 64 + item 10 + one trailing element gap
        assert_eq!(canvas.width(), 64 + 10 + 16);
        // First tile column lands right after the lead gap
        assert_eq!(canvas.get(64, 0), Some(Rgb::WHITE));
        // Lead gap stays background
        assert!((0..64).all(|x| canvas.get(x, 0) == Some(Rgb::OFF)));
    }

    #[test]
    fn test_compose_second_item_offset() {
        let mut a = PixelBuffer::new(40, 32);
        a.fill(Rgb::new(10, 10, 10));
        let mut b = PixelBuffer::new(60, 32);
        b.set(0, 0, Rgb::WHITE);

        let canvas = compositor().compose(&[a, b]);
        // Second tile starts at lead + w_a + eg + ig + eg
        let x_b = 64 + 40 + 16 + 32 + 16;
        assert_eq!(canvas.get(x_b, 0), Some(Rgb::WHITE));
        // The gap run between tiles is background
        assert_eq!(canvas.get(x_b - 1, 0), Some(Rgb::OFF));
        assert_eq!(canvas.get(64 + 40, 0), Some(Rgb::OFF));
    }

    #[test]
    fn test_compose_centers_short_tiles() {
        let mut tile = PixelBuffer::new(4, 16);
        tile.fill(Rgb::WHITE);
        let canvas = compositor().compose(&[tile]);

        // 16 rows centered in 32: rows 8..24 lit
        assert_eq!(canvas.get(64, 7), Some(Rgb::OFF));
        assert_eq!(canvas.get(64, 8), Some(Rgb::WHITE));
        assert_eq!(canvas.get(64, 23), Some(Rgb::WHITE));
        assert_eq!(canvas.get(64, 24), Some(Rgb::OFF));
    }

    #[test]
    fn test_compose_crops_tall_tiles() {
        let mut tile = PixelBuffer::new(4, 64);
        // Mark the vertical middle of the tile
        tile.set(0, 32, Rgb::WHITE);
        let canvas = compositor().compose(&[tile]);

        assert_eq!(canvas.height(), 32);
        // Middle of the tile maps to the middle of the display
        assert_eq!(canvas.get(64, 16), Some(Rgb::WHITE));
    }
}
