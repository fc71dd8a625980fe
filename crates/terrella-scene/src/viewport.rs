//! Screen-size state shared by the projector and flare layout.

/// Current drawable surface size. Consumers re-read this every frame, so a
/// host resize only has to update the struct.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
    /// Device pixel ratio, clamped to [`Viewport::MAX_PIXEL_RATIO`].
    pub pixel_ratio: f32,
}

impl Viewport {
    /// Upper bound on the device pixel ratio; dense displays render at 2x
    /// at most.
    pub const MAX_PIXEL_RATIO: f32 = 2.0;

    /// Build a viewport, clamping the pixel ratio.
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: pixel_ratio.min(Self::MAX_PIXEL_RATIO),
        }
    }

    /// Width / height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Replace the size after a host resize.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        *self = Self::new(width, height, pixel_ratio);
    }

    /// True when the size is finite and positive, i.e. usable for screen
    /// transforms.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.pixel_ratio.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0, 1.0)
    }
}
