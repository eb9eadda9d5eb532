/// Canvas size used to normalize pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given pixel size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a pixel position (origin top-left, y down) into normalized
    /// device coordinates (origin at the center, y up, `[-1, 1]` inside the
    /// canvas). A zero-sized viewport maps everything to the center.
    #[must_use]
    pub fn to_ndc(&self, px: f32, py: f32) -> (f32, f32) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return (0.0, 0.0);
        }
        let x = 2.0 * px / self.width - 1.0;
        let y = 1.0 - 2.0 * py / self.height;
        (x, y)
    }
}
