//! Monochrome pixel buffer of the simulated panel.
//!
//! One byte per pixel, row-major, top row first. `0` is off and `255` is lit.

/// Value of a lit pixel
pub const PIXEL_ON: u8 = 255;
/// Value of a dark pixel
pub const PIXEL_OFF: u8 = 0;

/// Size of the box drawn for every visible character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBox {
    pub width: u32,
    pub height: u32,
}

/// Fixed-size pixel buffer, allocated once and cleared every frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a dark buffer of `width` x `height` pixels
    pub fn allocate(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![PIXEL_OFF; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Darken every pixel
    pub fn clear(&mut self) {
        self.pixels.fill(PIXEL_OFF);
    }

    /// Raw pixels, top row first
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixels of row `y` (0 = top)
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.pixels[self.offset(x, y)])
    }

    /// Set one pixel; coordinates outside the panel are ignored
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            let offset = self.offset(x, y);
            self.pixels[offset] = value;
        }
    }

    /// Fill a rectangle, clipped at the panel edges
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, value: u8) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for row in y.min(self.height)..y_end {
            let start = self.offset(x.min(x_end), row);
            let end = self.offset(x_end, row);
            self.pixels[start..end].fill(value);
        }
    }

    /// Draw one glyph box per non-whitespace character, left to right.
    ///
    /// Drawing stops at the right edge; nothing ever wraps.
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, glyph: GlyphBox) {
        if y >= self.height {
            return;
        }
        let mut cursor = x;
        for ch in text.chars() {
            if cursor >= self.width {
                break;
            }
            if !ch.is_whitespace() {
                self.fill_rect(cursor, y, glyph.width, glyph.height, PIXEL_ON);
            }
            cursor = cursor.saturating_add(glyph.width);
        }
    }

    /// Number of lit pixels
    pub fn lit(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != PIXEL_OFF).count()
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
