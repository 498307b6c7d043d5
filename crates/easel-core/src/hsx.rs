//! Hue-based color model conversions (HSV and HSL).
//!
//! Shared by the hue/saturation/value/color blend modes and by
//! adjustment filters. Hue is measured in degrees [0, 360) and is
//! `None` for achromatic colors, which have no meaningful hue; the
//! reverse conversions map `None` back onto the achromatic axis.
//! Saturation, value, and lightness are normalized to [0, 1].
//!
//! # Types
//!
//! - [`rgb_to_hsv`] / [`hsv_to_rgb`] - hexcone model (V = max channel)
//! - [`rgb_to_hsl`] / [`hsl_to_rgb`] - bi-hexcone model (L = mid range)
//!
//! # Used By
//!
//! - `easel-composite` - HUE, SATURATION, VALUE, COLOR blend modes

/// Achromatic threshold for saturation and channel deltas.
const EPS: f32 = 1e-6;

/// Convert RGB to HSV.
///
/// Returns `(hue, saturation, value)`; hue is `None` when the color is
/// achromatic (saturation below threshold).
#[inline]
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (Option<f32>, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let v = max;
    let s = if max > EPS { (max - min) / max } else { 0.0 };

    if s < EPS {
        return (None, s, v);
    }

    let delta = max - min;
    let mut h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    (Some(h), s, v)
}

/// Convert HSV to RGB.
///
/// An absent hue or near-zero saturation yields the gray `(v, v, v)`.
#[inline]
pub fn hsv_to_rgb(h: Option<f32>, s: f32, v: f32) -> (f32, f32, f32) {
    let Some(mut h) = h else {
        return (v, v, v);
    };
    if s < EPS {
        return (v, v, v);
    }

    if h > 360.0 - EPS {
        h -= 360.0;
    }
    h /= 60.0;

    let i = h.floor() as i32;
    let f = h - i as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Convert RGB to HSL.
///
/// Returns `(hue, saturation, lightness)`; hue is `None` when the
/// channel spread is below threshold.
#[inline]
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (Option<f32>, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let l = (max + min) / 2.0;

    if max - min < EPS {
        return (None, 0.0, l);
    }

    let delta = max - min;
    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let mut h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    (Some(h), s, l)
}

/// Convert HSL to RGB.
///
/// An absent hue or near-zero saturation yields the gray `(l, l, l)`.
#[inline]
pub fn hsl_to_rgb(h: Option<f32>, s: f32, l: f32) -> (f32, f32, f32) {
    let Some(h) = h else {
        return (l, l, l);
    };
    if s < EPS {
        return (l, l, l);
    }

    let v2 = if l < 0.5 { l * (1.0 + s) } else { (l + s) - (s * l) };
    let v1 = 2.0 * l - v2;

    (
        hue_to_channel(v1, v2, h + 120.0),
        hue_to_channel(v1, v2, h),
        hue_to_channel(v1, v2, h - 120.0),
    )
}

/// Two-point hue interpolation helper for the HSL reconstruction.
#[inline]
fn hue_to_channel(n1: f32, n2: f32, hue: f32) -> f32 {
    let hue = if hue > 360.0 {
        hue - 360.0
    } else if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    };

    if hue < 60.0 {
        n1 + (n2 - n1) * hue / 60.0
    } else if hue < 180.0 {
        n2
    } else if hue < 240.0 {
        n1 + (n2 - n1) * (240.0 - hue) / 60.0
    } else {
        n1
    }
}
