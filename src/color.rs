//! Display colors and their fractional channel form.
//!
//! The viewer hands over 8-bit colors; every macro invocation in the scene
//! file takes `r,g,b` as fractions in `[0, 1]`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::export::format::Num;

/// An 8-bit-per-channel display color.
///
/// Serializes as a `[r, g, b]` array. Equality is by value, which is what
/// decides between the same-color and two-color bond macros.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Opaque white.
    pub const WHITE: Self = Self(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self(0, 0, 0);
    /// Pure blue, the default polymer trace color.
    pub const BLUE: Self = Self(0, 0, 255);

    /// Fractional channels of this color.
    #[must_use]
    pub fn channels(self) -> Channels {
        to_channels(self)
    }
}

/// Fractional color channels, each `source / 255`.
///
/// `Display` writes the bare `r,g,b` triple used as macro arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channels {
    /// Red fraction.
    pub r: f32,
    /// Green fraction.
    pub g: f32,
    /// Blue fraction.
    pub b: f32,
}

/// Convert an 8-bit color into fractional channels.
#[must_use]
pub fn to_channels(color: Rgb) -> Channels {
    Channels {
        r: f32::from(color.0) / 255.0,
        g: f32::from(color.1) / 255.0,
        b: f32::from(color.2) / 255.0,
    }
}

impl Channels {
    /// The channels as an array.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Wraps the channels as a `rgb<r,g,b>` color expression.
    #[must_use]
    pub fn rgb(self) -> RgbExpr {
        RgbExpr(self)
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", Num(self.r), Num(self.g), Num(self.b))
    }
}

/// A `rgb<r,g,b>` color expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbExpr(Channels);

impl fmt::Display for RgbExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb<{}>", self.0)
    }
}
