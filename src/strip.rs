//! Strip handle over a hardware pixel sink
//!
//! The strip validates its length once at construction and guards every
//! manual pixel write against that length. The sink itself owns the pixel
//! buffer and talks to the hardware.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::color::{Hsv, PackedColor, Rgb, hsv_to_rgb, lerp_rgb, packed_to_rgb, rgb_to_packed};
use crate::error::{Error, Result};

/// Shortest supported strip
pub const MIN_STRIP_LEN: usize = 1;

/// Longest supported strip
pub const MAX_STRIP_LEN: usize = 64;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Writes land in the driver's buffer and reach the LEDs on [`flush`].
///
/// [`flush`]: PixelSink::flush
pub trait PixelSink {
    /// Buffer a single pixel
    fn set_pixel(&mut self, index: usize, color: PackedColor);

    /// Buffer the same color on every pixel
    fn set_all(&mut self, color: PackedColor);

    /// Render the buffered pixels to the hardware
    fn flush(&mut self);
}

impl<T: PixelSink + ?Sized> PixelSink for &mut T {
    fn set_pixel(&mut self, index: usize, color: PackedColor) {
        (**self).set_pixel(index, color);
    }

    fn set_all(&mut self, color: PackedColor) {
        (**self).set_all(color);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

/// Who wrote the strip buffer last
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripMode {
    /// Cleared, or nothing written yet
    #[default]
    Off,
    /// Written through the manual pixel API
    Manual,
    /// Written by the active effect
    Effect,
}

/// Addressable LED strip of a fixed length
#[derive(Debug)]
pub struct Strip<S> {
    sink: S,
    length: usize,
    mode: StripMode,
}

impl<S: PixelSink> Strip<S> {
    /// Create a strip of `length` pixels on top of `sink`
    ///
    /// Fails with [`Error::StripSizeOutOfRange`] unless `length` is in 1-64.
    pub fn new(sink: S, length: usize) -> Result<Self> {
        if !(MIN_STRIP_LEN..=MAX_STRIP_LEN).contains(&length) {
            #[cfg(feature = "esp32-log")]
            println!("[Strip.new] rejected strip length {}", length);
            return Err(Error::StripSizeOutOfRange { length });
        }

        Ok(Self {
            sink,
            length,
            mode: StripMode::Off,
        })
    }

    pub const fn len(&self) -> usize {
        self.length
    }

    /// Always false, a strip holds at least one pixel
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub const fn mode(&self) -> StripMode {
        self.mode
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Set a single pixel
    ///
    /// An index past the end is rejected with [`Error::PixelOutOfRange`]
    /// and nothing is written.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<()> {
        self.set_pixel_packed(index, rgb_to_packed(color))
    }

    pub fn set_pixel_hsv(&mut self, index: usize, color: Hsv) -> Result<()> {
        self.set_pixel_packed(index, rgb_to_packed(hsv_to_rgb(color)))
    }

    pub fn set_pixel_packed(&mut self, index: usize, color: PackedColor) -> Result<()> {
        if index >= self.length {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Strip.set_pixel] index {} ignored, strip length is {}",
                index, self.length
            );
            return Err(Error::PixelOutOfRange {
                index,
                length: self.length,
            });
        }
        self.sink.set_pixel(index, color);
        self.mode = StripMode::Manual;
        Ok(())
    }

    /// Set every pixel with one bulk driver call
    pub fn set_all(&mut self, color: Rgb) {
        self.set_all_packed(rgb_to_packed(color));
    }

    pub fn set_all_hsv(&mut self, color: Hsv) {
        self.set_all_packed(rgb_to_packed(hsv_to_rgb(color)));
    }

    pub fn set_all_packed(&mut self, color: PackedColor) {
        self.sink.set_all(color);
        self.mode = StripMode::Manual;
    }

    /// Set every pixel one write at a time
    ///
    /// Some drivers drop bulk writes on long strips; this path only uses
    /// single-pixel writes. Pacing between writes is up to the caller.
    pub fn set_all_sequential(&mut self, color: Rgb) {
        let packed = rgb_to_packed(color);
        for index in 0..self.length {
            self.sink.set_pixel(index, packed);
        }
        self.mode = StripMode::Manual;
    }

    /// Fill the strip with an RGB gradient from `start` (first pixel) to
    /// `end` (last pixel)
    pub fn fill_gradient(&mut self, start: Rgb, end: Rgb) {
        let last = self.length.saturating_sub(1);
        self.fill_with(|index| lerp_rgb(start, end, gradient_position(index, last)));
        self.mode = StripMode::Manual;
    }

    /// Same as [`Strip::fill_gradient`] with HSV endpoints
    pub fn fill_gradient_hsv(&mut self, start: Hsv, end: Hsv) {
        self.fill_gradient(hsv_to_rgb(start), hsv_to_rgb(end));
    }

    /// Same as [`Strip::fill_gradient`] with packed endpoints
    pub fn fill_gradient_packed(&mut self, start: PackedColor, end: PackedColor) {
        self.fill_gradient(packed_to_rgb(start), packed_to_rgb(end));
    }

    /// Write every pixel with the color returned for its index
    pub fn fill_with(&mut self, mut color_at: impl FnMut(usize) -> Rgb) {
        for index in 0..self.length {
            self.sink.set_pixel(index, rgb_to_packed(color_at(index)));
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.sink.set_all(0);
        self.mode = StripMode::Off;
    }

    /// Push the buffered pixels to the hardware
    pub fn flush(&mut self) {
        self.sink.flush();
    }

    pub(crate) fn set_mode(&mut self, mode: StripMode) {
        self.mode = mode;
    }
}

/// Interpolation position of pixel `index` on a strip whose last index is
/// `last`. A single-pixel strip sits at 0.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn gradient_position(index: usize, last: usize) -> f32 {
    if last == 0 {
        0.0
    } else {
        index as f32 / last as f32
    }
}

/// In-memory pixel sink
///
/// Keeps a back buffer for pending writes and a front buffer with the last
/// flushed frame. Useful for simulators and tests.
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer {
    back: Vec<PackedColor, MAX_STRIP_LEN>,
    front: Vec<PackedColor, MAX_STRIP_LEN>,
    flush_count: u32,
}

impl FrameBuffer {
    /// Create a black buffer of `length` pixels, capped at [`MAX_STRIP_LEN`]
    pub fn new(length: usize) -> Self {
        let length = length.min(MAX_STRIP_LEN);
        let mut back = Vec::new();
        let _ = back.resize(length, 0);
        Self {
            front: back.clone(),
            back,
            flush_count: 0,
        }
    }

    /// Pending pixels, including writes not flushed yet
    pub fn pixels(&self) -> &[PackedColor] {
        &self.back
    }

    /// Pixels as of the last flush
    pub fn frame(&self) -> &[PackedColor] {
        &self.front
    }

    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.back.get(index).copied().map(packed_to_rgb)
    }

    pub const fn flush_count(&self) -> u32 {
        self.flush_count
    }
}

impl PixelSink for FrameBuffer {
    fn set_pixel(&mut self, index: usize, color: PackedColor) {
        if let Some(pixel) = self.back.get_mut(index) {
            *pixel = color;
        }
    }

    fn set_all(&mut self, color: PackedColor) {
        for pixel in &mut self.back {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        self.front.clone_from(&self.back);
        self.flush_count = self.flush_count.wrapping_add(1);
    }
}
