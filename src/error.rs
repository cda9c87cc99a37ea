use displaydoc::Display;

/// A specialized result type for strip operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the strip and the effect engine.
#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
pub enum Error {
    /// strip length {length} is outside the supported range 1-64
    StripSizeOutOfRange { length: usize },
    /// pixel index {index} is outside a strip of {length} pixels
    PixelOutOfRange { index: usize, length: usize },
    /// effect registry is full ({capacity} effects)
    EngineFull { capacity: usize },
}
