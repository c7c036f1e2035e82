//! Bond geometry: which macro draws a bond and with what arguments.
//!
//! Multi-order bonds are drawn as parallel cylinders displaced along an
//! axis perpendicular to the bond in the screen (xy) plane. The macros in
//! [`macros`](super::macros) compute that offset at render time; the same
//! computation is exposed here through [`parallel_offset`] and
//! [`BondGeometry::strands`] so the emitted geometry can be inspected
//! without a renderer.

use std::fmt;

use glam::{Mat4, Vec2, Vec3};

use super::format::{Num, Triple};
use crate::color::{to_channels, Channels};
use crate::scene::Bond;

/// Raw order tag of an aromatic bond.
pub const AROMATIC_ORDER: u16 = (1 << 2) | 1;

/// Bits of the order tag that flag a hydrogen bond.
pub const HYDROGEN_MASK: u16 = 0x0F << 6;

/// Separation between parallel strands of a double or aromatic bond, in
/// bond radii.
pub const DOUBLE_SEPARATION: f32 = 1.5;

/// Separation between parallel strands of a triple bond, in bond radii.
pub const TRIPLE_SEPARATION: f32 = 2.5;

/// Geometry family a bond is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondClass {
    /// One cylinder.
    Single,
    /// Two parallel cylinders.
    Double,
    /// Three parallel cylinders.
    Triple,
    /// One cylinder plus a dashed inner line.
    Aromatic,
    /// Dashed cylinder, no end caps.
    Hydrogen,
}

impl BondClass {
    /// Map a raw bond-order tag onto a class.
    ///
    /// Returns `None` for tags with no geometry (partial bonds, stereo
    /// flags, unknown values); such bonds are not drawn.
    #[must_use]
    pub const fn from_order(order: u16) -> Option<Self> {
        match order {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            AROMATIC_ORDER => Some(Self::Aromatic),
            o if o & HYDROGEN_MASK != 0 => Some(Self::Hydrogen),
            _ => None,
        }
    }

    /// Macro name without the color-variant digit.
    #[must_use]
    pub const fn macro_family(self) -> &'static str {
        match self {
            Self::Single => "bond",
            Self::Double => "dblbond",
            Self::Triple => "trpbond",
            Self::Aromatic => "abond",
            Self::Hydrogen => "hbond",
        }
    }

    /// Strand separation in bond radii, for classes drawn with parallel
    /// strands.
    #[must_use]
    pub const fn separation(self) -> Option<f32> {
        match self {
            Self::Double | Self::Aromatic => Some(DOUBLE_SEPARATION),
            Self::Triple => Some(TRIPLE_SEPARATION),
            Self::Single | Self::Hydrogen => None,
        }
    }
}

/// Same-color (`1`) or two-color (`2`) macro variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorVariant {
    /// Both halves share one color.
    Same,
    /// Each half takes its endpoint's color.
    Split,
}

impl ColorVariant {
    /// Digit appended to the macro family name.
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Same => '1',
            Self::Split => '2',
        }
    }
}

/// Perpendicular displacement of the outer strands of a multi-order bond.
///
/// Computed in the xy plane only; z is ignored. The result has length
/// `separation` and is a clockwise 90° rotation of the bond direction. A
/// bond with no xy extent (pointing straight at the camera) uses the fixed
/// axis `(0, separation)`.
#[must_use]
pub fn parallel_offset(start: Vec3, end: Vec3, separation: f32) -> Vec2 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let mag2d = dx.hypot(dy);
    if mag2d == 0.0 {
        Vec2::new(0.0, separation)
    } else {
        Vec2::new(separation * dy / mag2d, -separation * dx / mag2d)
    }
}

/// One macro invocation drawing a bond or a bond strand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCall {
    /// Macro family, e.g. `"dblbond"`.
    pub family: &'static str,
    /// Color variant selecting the `1`/`2` suffix.
    pub variant: ColorVariant,
    /// Transformed first endpoint.
    pub start: Vec3,
    /// Transformed second endpoint.
    pub end: Vec3,
    /// Cylinder radius.
    pub radius: f32,
    /// Color of the half at `start`.
    pub start_color: Channels,
    /// Color of the half at `end`; unused by the same-color variant.
    pub end_color: Channels,
}

impl BondCall {
    /// Full macro name, e.g. `"dblbond2"`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}{}", self.family, self.variant.digit())
    }

    /// Numeric arguments in macro-signature order: both endpoints, the
    /// radius, then one or two color triples.
    #[must_use]
    pub fn args(&self) -> Vec<f32> {
        let mut args = Vec::with_capacity(13);
        args.extend_from_slice(&self.start.to_array());
        args.extend_from_slice(&self.end.to_array());
        args.push(self.radius);
        args.extend_from_slice(&self.start_color.to_array());
        if self.variant == ColorVariant::Split {
            args.extend_from_slice(&self.end_color.to_array());
        }
        args
    }

    fn shifted(&self, family: &'static str, by: Vec2) -> Self {
        let by = by.extend(0.0);
        Self {
            family,
            start: self.start + by,
            end: self.end + by,
            ..*self
        }
    }
}

impl fmt::Display for BondCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{},{},{}",
            self.name(),
            Triple(self.start.to_array()),
            Triple(self.end.to_array()),
            Num(self.radius),
            self.start_color,
        )?;
        if self.variant == ColorVariant::Split {
            write!(f, ",{}", self.end_color)?;
        }
        f.write_str(")")
    }
}

/// A bond resolved to its class, color variant and transformed endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondGeometry {
    /// Geometry family.
    pub class: BondClass,
    /// The single invocation written to the scene file.
    pub call: BondCall,
}

impl BondGeometry {
    /// Resolve a scene bond, transforming both endpoints with `transform`.
    ///
    /// Returns `None` when the bond is invisible (zero radius) or its order
    /// tag has no geometry.
    #[must_use]
    pub fn from_bond(bond: &Bond, transform: &Mat4) -> Option<Self> {
        if !bond.is_visible() {
            return None;
        }
        let Some(class) = BondClass::from_order(bond.order) else {
            log::trace!("skipping bond with unknown order {}", bond.order);
            return None;
        };
        let variant = if bond.is_single_color() {
            ColorVariant::Same
        } else {
            ColorVariant::Split
        };
        Some(Self {
            class,
            call: BondCall {
                family: class.macro_family(),
                variant,
                start: transform.transform_point3(bond.start),
                end: transform.transform_point3(bond.end),
                radius: bond.radius,
                start_color: to_channels(bond.start_color),
                end_color: to_channels(bond.end_color),
            },
        })
    }

    /// Perpendicular strand offset, for classes drawn with parallel
    /// strands.
    #[must_use]
    pub fn offset(&self) -> Option<Vec2> {
        self.class.separation().map(|s| {
            parallel_offset(self.call.start, self.call.end, s * self.call.radius)
        })
    }

    /// The `bond1`/`bond2` strands the class macro expands into, in the
    /// order the macro draws them.
    ///
    /// Single bonds are one unshifted strand, double bonds `+offset` then
    /// `-offset`, triple bonds `+offset`, unshifted, `-offset`, aromatic
    /// bonds one strand at `-offset` (the dashed inner line is not a
    /// strand). Hydrogen bonds have no strands.
    #[must_use]
    pub fn strands(&self) -> Vec<BondCall> {
        let base = "bond";
        match (self.class, self.offset()) {
            (BondClass::Single, _) => vec![self.call.shifted(base, Vec2::ZERO)],
            (BondClass::Double, Some(o)) => vec![
                self.call.shifted(base, o),
                self.call.shifted(base, -o),
            ],
            (BondClass::Triple, Some(o)) => vec![
                self.call.shifted(base, o),
                self.call.shifted(base, Vec2::ZERO),
                self.call.shifted(base, -o),
            ],
            (BondClass::Aromatic, Some(o)) => {
                vec![self.call.shifted(base, -o)]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::color::Rgb;

    fn bond(order: u16, end: Vec3, end_color: Rgb) -> Bond {
        Bond {
            start: Vec3::ZERO,
            end,
            radius: 0.2,
            start_color: Rgb::WHITE,
            end_color,
            order,
            model_index: 0,
        }
    }

    fn geometry(order: u16, end: Vec3) -> BondGeometry {
        BondGeometry::from_bond(&bond(order, end, Rgb::WHITE), &Mat4::IDENTITY)
            .unwrap()
    }

    #[test]
    fn order_tags_map_to_classes() {
        assert_eq!(BondClass::from_order(1), Some(BondClass::Single));
        assert_eq!(BondClass::from_order(2), Some(BondClass::Double));
        assert_eq!(BondClass::from_order(3), Some(BondClass::Triple));
        assert_eq!(BondClass::from_order(5), Some(BondClass::Aromatic));
        assert_eq!(BondClass::from_order(1 << 6), Some(BondClass::Hydrogen));
        assert_eq!(BondClass::from_order(8 << 6), Some(BondClass::Hydrogen));
    }

    #[test]
    fn unknown_orders_have_no_class() {
        for order in [0, 4, (1 << 3) | 1, (1 << 10) | 1, (1 << 11) | 2] {
            assert_eq!(BondClass::from_order(order), None, "order {order}");
        }
    }

    #[test]
    fn unknown_order_and_zero_radius_are_skipped() {
        let unknown = bond(4, Vec3::X, Rgb::WHITE);
        assert!(BondGeometry::from_bond(&unknown, &Mat4::IDENTITY).is_none());

        let mut hidden = bond(1, Vec3::X, Rgb::WHITE);
        hidden.radius = 0.0;
        assert!(BondGeometry::from_bond(&hidden, &Mat4::IDENTITY).is_none());
    }

    #[test]
    fn variant_follows_color_equality() {
        let same = geometry(1, Vec3::X);
        assert_eq!(same.call.name(), "bond1");
        assert_eq!(same.call.args().len(), 10);

        let split =
            BondGeometry::from_bond(&bond(1, Vec3::X, Rgb::BLUE), &Mat4::IDENTITY)
                .unwrap();
        assert_eq!(split.call.name(), "bond2");
        assert_eq!(split.call.args().len(), 13);
    }

    #[test]
    fn endpoints_are_transformed() {
        let transform = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let g = BondGeometry::from_bond(&bond(1, Vec3::X, Rgb::WHITE), &transform)
            .unwrap();
        assert_eq!(g.call.start, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(g.call.end, Vec3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn call_display_matches_macro_signature() {
        let g =
            BondGeometry::from_bond(&bond(2, Vec3::X, Rgb::BLUE), &Mat4::IDENTITY)
                .unwrap();
        assert_eq!(g.call.to_string(), "dblbond2(0,0,0,1,0,0,0.2,1,1,1,0,0,1)");
    }

    #[test]
    fn double_offsets_are_antiparallel_and_perpendicular() {
        let end = Vec3::new(3.0, 4.0, 7.0);
        let g = geometry(2, end);
        let strands = g.strands();
        assert_eq!(strands.len(), 2);

        let up = (strands[0].start - g.call.start).truncate();
        let down = (strands[1].start - g.call.start).truncate();
        assert!(up.abs_diff_eq(-down, 1e-6));
        assert_relative_eq!(up.length(), 1.5 * 0.2, epsilon = 1e-6);
        assert_relative_eq!(up.dot(end.truncate()), 0.0, epsilon = 1e-6);
        // z never moves
        assert_eq!(strands[0].start.z, 0.0);
        assert_eq!(strands[0].end.z, 7.0);
    }

    #[test]
    fn triple_has_a_centre_strand() {
        let g = geometry(3, Vec3::new(1.0, 0.0, 0.0));
        let strands = g.strands();
        assert_eq!(strands.len(), 3);
        assert_eq!(strands[1].start, g.call.start);

        let outer = (strands[0].start - g.call.start).truncate();
        assert_relative_eq!(outer.length(), 2.5 * 0.2, epsilon = 1e-6);
        let inner = (strands[2].start - g.call.start).truncate();
        assert!(inner.abs_diff_eq(-outer, 1e-6));
    }

    #[test]
    fn degenerate_direction_uses_fixed_axis() {
        let g = geometry(2, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(g.offset(), Some(Vec2::new(0.0, 1.5 * 0.2)));
    }

    #[test]
    fn opposite_components_are_not_degenerate() {
        let offset =
            parallel_offset(Vec3::ZERO, Vec3::new(1.0, -1.0, 0.0), 1.0);
        assert_relative_eq!(offset.dot(Vec2::new(1.0, -1.0)), 0.0);
        assert_relative_eq!(offset.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn offset_rotates_clockwise() {
        let offset = parallel_offset(Vec3::ZERO, Vec3::X, 2.0);
        assert!(offset.abs_diff_eq(Vec2::new(0.0, -2.0), 1e-6));
    }

    #[test]
    fn aromatic_draws_one_strand_opposite_the_offset() {
        let g = geometry(AROMATIC_ORDER, Vec3::X);
        let strands = g.strands();
        assert_eq!(strands.len(), 1);
        assert_relative_eq!(strands[0].start.y, 0.3, epsilon = 1e-6);
    }

    #[test]
    fn single_and_hydrogen_have_no_offset() {
        assert_eq!(geometry(1, Vec3::X).offset(), None);
        let hbond = geometry(1 << 6, Vec3::X);
        assert_eq!(hbond.offset(), None);
        assert!(hbond.strands().is_empty());
        assert_eq!(hbond.call.name(), "hbond1");
    }
}
