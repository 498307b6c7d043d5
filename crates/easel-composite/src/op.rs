//! Blend mode registry.
//!
//! Every blend mode carries a stable numeric id. The ids appear in saved
//! documents, so they are a wire contract: a slot never changes meaning,
//! and ids whose routines were never ported stay reserved rather than
//! being reused. Loading a document with a reserved id is legal; the
//! dispatcher composites it as a no-op.
//!
//! # Types
//!
//! - [`CompositeOp`] - blend mode identifiers with stable ids
//! - [`USER_VISIBLE_OPS`] / [`user_visible_composite_ops`] - the menu
//!   list, in menu order
//!
//! # Example
//!
//! ```
//! use easel_composite::op::CompositeOp;
//!
//! assert_eq!(CompositeOp::Multiply.id(), 10);
//! assert_eq!(CompositeOp::from_id(10), Some(CompositeOp::Multiply));
//! assert_eq!(CompositeOp::from_id(200), None);
//! ```
//!
//! # Used By
//!
//! - `easel-composite::engine` - dispatch
//! - `easel-color` - colorspace op listing

use std::fmt;

/// Blend mode identifier.
///
/// The discriminant is the stable document id ([`id`](CompositeOp::id)).
/// [`is_implemented`](CompositeOp::is_implemented) distinguishes modes
/// with a compositing routine from reserved slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CompositeOp {
    /// Source-over, the default painting mode.
    #[default]
    Over = 0,
    /// Reserved slot (Porter-Duff in).
    In = 1,
    /// Reserved slot (Porter-Duff out).
    Out = 2,
    /// Reserved slot (Porter-Duff atop).
    Atop = 3,
    /// Reserved slot (Porter-Duff xor).
    Xor = 4,
    /// Reserved slot (additive plus).
    Plus = 5,
    /// Reserved slot (subtractive minus).
    Minus = 6,
    /// Reserved slot (add).
    Add = 7,
    /// Reserved slot (subtract).
    Subtract = 8,
    /// Reserved slot (difference).
    Diff = 9,
    /// Multiply the channel values.
    Multiply = 10,
    /// Divide destination by source.
    Divide = 11,
    /// Color dodge.
    Dodge = 12,
    /// Color burn.
    Burn = 13,
    /// Reserved slot (bumpmap).
    Bumpmap = 14,
    /// Unconditional overwrite scaled by opacity.
    Copy = 15,
    /// Reserved slot (copy red channel).
    CopyRed = 16,
    /// Reserved slot (copy green channel).
    CopyGreen = 17,
    /// Reserved slot (copy blue channel).
    CopyBlue = 18,
    /// Reserved slot (copy opacity).
    CopyOpacity = 19,
    /// Reserved slot (clear).
    Clear = 20,
    /// Reserved slot (dissolve).
    Dissolve = 21,
    /// Reserved slot (displace).
    Displace = 22,
    /// Reserved slot (modulate).
    Modulate = 23,
    /// Reserved slot (threshold).
    Threshold = 24,
    /// Explicit "do not composite" marker.
    NoComposite = 25,
    /// Channelwise minimum.
    Darken = 26,
    /// Channelwise maximum.
    Lighten = 27,
    /// Source hue with destination saturation and value.
    Hue = 28,
    /// Source saturation with destination hue and value.
    Saturation = 29,
    /// Source value with destination hue and saturation.
    Value = 30,
    /// Source hue and saturation with destination lightness.
    Color = 31,
    /// Reserved slot (colorize).
    Colorize = 32,
    /// Reserved slot (luminize).
    Luminize = 33,
    /// Inverse multiply.
    Screen = 34,
    /// Multiply or screen depending on the destination.
    Overlay = 35,
    /// Multiply destination alpha down by source alpha.
    Erase = 36,
    /// Placeholder for ids from the future; composites as a no-op.
    Undefined = 37,
}

impl CompositeOp {
    /// The stable document id.
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Map a document id back to its mode.
    ///
    /// Returns `None` for ids outside the table; callers typically fall
    /// back to [`CompositeOp::Undefined`] so the pixels survive a load
    /// from a newer document version.
    pub const fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            0 => CompositeOp::Over,
            1 => CompositeOp::In,
            2 => CompositeOp::Out,
            3 => CompositeOp::Atop,
            4 => CompositeOp::Xor,
            5 => CompositeOp::Plus,
            6 => CompositeOp::Minus,
            7 => CompositeOp::Add,
            8 => CompositeOp::Subtract,
            9 => CompositeOp::Diff,
            10 => CompositeOp::Multiply,
            11 => CompositeOp::Divide,
            12 => CompositeOp::Dodge,
            13 => CompositeOp::Burn,
            14 => CompositeOp::Bumpmap,
            15 => CompositeOp::Copy,
            16 => CompositeOp::CopyRed,
            17 => CompositeOp::CopyGreen,
            18 => CompositeOp::CopyBlue,
            19 => CompositeOp::CopyOpacity,
            20 => CompositeOp::Clear,
            21 => CompositeOp::Dissolve,
            22 => CompositeOp::Displace,
            23 => CompositeOp::Modulate,
            24 => CompositeOp::Threshold,
            25 => CompositeOp::NoComposite,
            26 => CompositeOp::Darken,
            27 => CompositeOp::Lighten,
            28 => CompositeOp::Hue,
            29 => CompositeOp::Saturation,
            30 => CompositeOp::Value,
            31 => CompositeOp::Color,
            32 => CompositeOp::Colorize,
            33 => CompositeOp::Luminize,
            34 => CompositeOp::Screen,
            35 => CompositeOp::Overlay,
            36 => CompositeOp::Erase,
            37 => CompositeOp::Undefined,
            _ => return None,
        })
    }

    /// UI label for menus and layer lists.
    pub const fn label(self) -> &'static str {
        match self {
            CompositeOp::Over => "Normal",
            CompositeOp::In => "In",
            CompositeOp::Out => "Out",
            CompositeOp::Atop => "Atop",
            CompositeOp::Xor => "Xor",
            CompositeOp::Plus => "Plus",
            CompositeOp::Minus => "Minus",
            CompositeOp::Add => "Add",
            CompositeOp::Subtract => "Subtract",
            CompositeOp::Diff => "Diff",
            CompositeOp::Multiply => "Multiply",
            CompositeOp::Divide => "Divide",
            CompositeOp::Dodge => "Dodge",
            CompositeOp::Burn => "Burn",
            CompositeOp::Bumpmap => "Bumpmap",
            CompositeOp::Copy => "Copy",
            CompositeOp::CopyRed => "Copy Red",
            CompositeOp::CopyGreen => "Copy Green",
            CompositeOp::CopyBlue => "Copy Blue",
            CompositeOp::CopyOpacity => "Copy Opacity",
            CompositeOp::Clear => "Clear",
            CompositeOp::Dissolve => "Dissolve",
            CompositeOp::Displace => "Displace",
            CompositeOp::Modulate => "Modulate",
            CompositeOp::Threshold => "Threshold",
            CompositeOp::NoComposite => "No Composition",
            CompositeOp::Darken => "Darken",
            CompositeOp::Lighten => "Lighten",
            CompositeOp::Hue => "Hue",
            CompositeOp::Saturation => "Saturation",
            CompositeOp::Value => "Value",
            CompositeOp::Color => "Color",
            CompositeOp::Colorize => "Colorize",
            CompositeOp::Luminize => "Luminize",
            CompositeOp::Screen => "Screen",
            CompositeOp::Overlay => "Overlay",
            CompositeOp::Erase => "Erase",
            CompositeOp::Undefined => "Undefined",
        }
    }

    /// Whether a compositing routine exists for this mode.
    ///
    /// Reserved slots and the explicit no-op markers return false and
    /// leave the destination untouched when dispatched.
    pub const fn is_implemented(self) -> bool {
        matches!(
            self,
            CompositeOp::Over
                | CompositeOp::Multiply
                | CompositeOp::Divide
                | CompositeOp::Dodge
                | CompositeOp::Burn
                | CompositeOp::Copy
                | CompositeOp::Darken
                | CompositeOp::Lighten
                | CompositeOp::Hue
                | CompositeOp::Saturation
                | CompositeOp::Value
                | CompositeOp::Color
                | CompositeOp::Screen
                | CompositeOp::Overlay
                | CompositeOp::Erase
        )
    }
}

impl fmt::Display for CompositeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The blend modes offered to users, in menu order.
///
/// The order is part of the UI contract; new modes append.
pub const USER_VISIBLE_OPS: [CompositeOp; 13] = [
    CompositeOp::Over,
    CompositeOp::Multiply,
    CompositeOp::Burn,
    CompositeOp::Dodge,
    CompositeOp::Divide,
    CompositeOp::Screen,
    CompositeOp::Overlay,
    CompositeOp::Darken,
    CompositeOp::Lighten,
    CompositeOp::Hue,
    CompositeOp::Saturation,
    CompositeOp::Value,
    CompositeOp::Color,
];

/// The user-visible blend mode list, in menu order.
#[inline]
pub fn user_visible_composite_ops() -> &'static [CompositeOp] {
    &USER_VISIBLE_OPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_stability() {
        assert_eq!(CompositeOp::Over.id(), 0);
        assert_eq!(CompositeOp::Multiply.id(), 10);
        assert_eq!(CompositeOp::Copy.id(), 15);
        assert_eq!(CompositeOp::NoComposite.id(), 25);
        assert_eq!(CompositeOp::Darken.id(), 26);
        assert_eq!(CompositeOp::Color.id(), 31);
        assert_eq!(CompositeOp::Screen.id(), 34);
        assert_eq!(CompositeOp::Erase.id(), 36);
        assert_eq!(CompositeOp::Undefined.id(), 37);
    }

    #[test]
    fn test_from_id_roundtrip() {
        for id in 0..=37u8 {
            let op = CompositeOp::from_id(id).unwrap();
            assert_eq!(op.id(), id);
        }
        assert_eq!(CompositeOp::from_id(38), None);
        assert_eq!(CompositeOp::from_id(255), None);
    }

    #[test]
    fn test_menu_order() {
        let ops = user_visible_composite_ops();
        assert_eq!(ops.len(), 13);
        assert_eq!(ops[0], CompositeOp::Over);
        assert_eq!(ops[1], CompositeOp::Multiply);
        assert_eq!(ops[2], CompositeOp::Burn);
        assert_eq!(ops[3], CompositeOp::Dodge);
        assert_eq!(ops[12], CompositeOp::Color);
        for op in ops {
            assert!(op.is_implemented(), "{op} listed but not implemented");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(CompositeOp::Over.label(), "Normal");
        assert_eq!(CompositeOp::Multiply.to_string(), "Multiply");
        assert_eq!(CompositeOp::NoComposite.label(), "No Composition");
    }

    #[test]
    fn test_reserved_not_implemented() {
        assert!(!CompositeOp::Dissolve.is_implemented());
        assert!(!CompositeOp::Xor.is_implemented());
        assert!(!CompositeOp::Undefined.is_implemented());
        assert!(!CompositeOp::NoComposite.is_implemented());
        assert!(CompositeOp::Erase.is_implemented());
    }

    #[test]
    fn test_default_is_over() {
        assert_eq!(CompositeOp::default(), CompositeOp::Over);
    }
}
