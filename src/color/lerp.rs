use crate::color::{Hsv, Rgb, clamp_unit, normalize_hue};

/// How hue travels between two HSV colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueInterpolation {
    /// Plain linear interpolation of the hue angle. 0° to 300° goes the long
    /// way through green and blue.
    #[default]
    Linear,
    /// Take the shorter arc around the hue circle. 0° to 300° passes
    /// through magenta only.
    Shortest,
}

/// Interpolate two RGB colors per channel.
///
/// `t` is clamped to `[0, 1]`, so `0` returns `from` and `1` returns `to`.
pub fn lerp_rgb(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = clamp_unit(t);
    Rgb {
        r: lerp_channel(from.r, to.r, t),
        g: lerp_channel(from.g, to.g, t),
        b: lerp_channel(from.b, to.b, t),
    }
}

/// Interpolate two HSV colors per component.
///
/// `t` is clamped to `[0, 1]`. The resulting hue is wrapped into `[0, 360)`.
pub fn lerp_hsv(from: Hsv, to: Hsv, t: f32, hue: HueInterpolation) -> Hsv {
    let t = clamp_unit(t);

    let hue_delta = match hue {
        HueInterpolation::Linear => to.hue - from.hue,
        HueInterpolation::Shortest => {
            let delta = libm::fmodf(to.hue - from.hue, 360.0);
            if delta > 180.0 {
                delta - 360.0
            } else if delta < -180.0 {
                delta + 360.0
            } else {
                delta
            }
        }
    };

    Hsv {
        hue: normalize_hue(from.hue + hue_delta * t),
        saturation: clamp_unit(from.saturation + (to.saturation - from.saturation) * t),
        value: clamp_unit(from.value + (to.value - from.value) * t),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    libm::roundf(a + (b - a) * t).clamp(0.0, 255.0) as u8
}
