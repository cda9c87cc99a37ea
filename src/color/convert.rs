#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Hsv, PackedColor, Rgb, clamp_unit};

const CHANNEL_MAX: f32 = 255.0;
const FULL_TURN: f32 = 360.0;
const SECTOR_DEGREES: f32 = 60.0;

/// Pack an RGB color into `0x00RRGGBB`
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_packed(rgb: Rgb) -> PackedColor {
    ((rgb.r as u32) << 16) | ((rgb.g as u32) << 8) | rgb.b as u32
}

/// Pack raw channel values, clamping each one into 0-255
///
/// Out-of-range input saturates at the nearest bound instead of wrapping.
pub fn pack_channels(red: i32, green: i32, blue: i32) -> PackedColor {
    rgb_to_packed(Rgb {
        r: clamp_channel(red),
        g: clamp_channel(green),
        b: clamp_channel(blue),
    })
}

/// Create an RGB color from a packed `0x00RRGGBB` value
///
/// The top byte is ignored.
#[allow(clippy::cast_possible_truncation)]
pub const fn packed_to_rgb(color: PackedColor) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Convert RGB to HSV.
///
/// Achromatic colors get hue 0, black gets saturation 0.
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f32::from(rgb.r) / CHANNEL_MAX;
    let g = f32::from(rgb.g) / CHANNEL_MAX;
    let b = f32::from(rgb.b) / CHANNEL_MAX;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // `max` is always one of the channels, so exact comparison is fine here
    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        SECTOR_DEGREES * ((g - b) / delta)
    } else if max == g {
        SECTOR_DEGREES * ((b - r) / delta) + 120.0
    } else {
        SECTOR_DEGREES * ((r - g) / delta) + 240.0
    };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        hue: normalize_hue(hue),
        saturation,
        value: max,
    }
}

/// Convert HSV to RGB using the six 60° hue sectors.
///
/// Zero saturation yields gray at `value` intensity.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let s = clamp_unit(hsv.saturation);
    let v = clamp_unit(hsv.value);

    if s <= 0.0 {
        let gray = unit_to_channel(v);
        return Rgb {
            r: gray,
            g: gray,
            b: gray,
        };
    }

    let h = normalize_hue(hsv.hue) / SECTOR_DEGREES;
    let sector = libm::floorf(h);
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: unit_to_channel(r),
        g: unit_to_channel(g),
        b: unit_to_channel(b),
    }
}

pub fn packed_to_hsv(color: PackedColor) -> Hsv {
    rgb_to_hsv(packed_to_rgb(color))
}

pub fn hsv_to_packed(hsv: Hsv) -> PackedColor {
    rgb_to_packed(hsv_to_rgb(hsv))
}

/// Wrap a hue in degrees into `[0, 360)`.
///
/// Negative hues wrap to positive. Non-finite input maps to 0.
pub fn normalize_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let mut wrapped = libm::fmodf(hue, FULL_TURN);
    if wrapped < 0.0 {
        wrapped += FULL_TURN;
    }
    // -tiny + 360.0 rounds up to 360.0 in f32
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_channel(x: f32) -> u8 {
    libm::roundf(clamp_unit(x) * CHANNEL_MAX) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: i32) -> u8 {
    #[cfg(feature = "esp32-log")]
    {
        if !(0..=255).contains(&value) {
            println!("[color] channel value {} clamped to 0-255", value);
        }
    }
    value.clamp(0, 255) as u8
}
