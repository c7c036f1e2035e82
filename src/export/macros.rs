//! The fixed catalog of shape macros written once near the top of every
//! scene file.
//!
//! Entity lines only ever invoke these macros; all cylinders and spheres
//! are built here. The parallel-strand offset computed by the `dblbond`,
//! `trpbond` and `abond` macros mirrors
//! [`parallel_offset`](super::bond::parallel_offset).

use std::io::{self, Write};

use super::format::Num;
use crate::options::FinishOptions;

/// Every macro name the catalog declares, in declaration order.
pub const MACRO_NAMES: [&str; 11] = [
    "atom", "bond1", "bond2", "dblbond1", "dblbond2", "trpbond1", "trpbond2",
    "hbond1", "hbond2", "abond1", "abond2",
];

const SAME: &str = "X1,Y1,Z1,X2,Y2,Z2,RADIUS,R,G,B";
const SPLIT: &str = "X1,Y1,Z1,X2,Y2,Z2,RADIUS,R1,G1,B1,R2,G2,B2";

/// Write the default finish followed by the whole macro catalog.
pub fn write_macros<W: Write>(
    w: &mut W,
    finish: &FinishOptions,
) -> io::Result<()> {
    write_finish(w, finish)?;
    write_atom(w)?;
    write_bond(w)?;
    write_double_bond(w)?;
    write_triple_bond(w)?;
    write_hydrogen_bond(w)?;
    write_aromatic_bond(w)
}

fn write_finish<W: Write>(w: &mut W, finish: &FinishOptions) -> io::Result<()> {
    write!(
        w,
        "#default {{ finish {{\n ambient {} diffuse {} specular {} roughness {}",
        Num(finish.ambient),
        Num(finish.diffuse),
        Num(finish.specular),
        Num(finish.roughness),
    )?;
    if finish.metallic {
        w.write_all(b" metallic")?;
    }
    w.write_all(b"}}\n\n")
}

fn write_atom<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(
        b"#macro atom(X,Y,Z,RADIUS,R,G,B)\n\
          \x20sphere{<X,Y,Z>,RADIUS\n\
          \x20 pigment{rgb<R,G,B>}}\n\
          #end\n\n",
    )
}

fn write_bond<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "#macro bond1({SAME})")?;
    w.write_all(
        b" cylinder{<X1,Y1,Z1>,<X2,Y2,Z2>,RADIUS\n\
          \x20 pigment{rgb<R,G,B>}}\n\
          \x20sphere{<X1,Y1,Z1>,RADIUS\n\
          \x20 pigment{rgb<R,G,B>}}\n\
          \x20sphere{<X2,Y2,Z2>,RADIUS\n\
          \x20 pigment{rgb<R,G,B>}}\n\
          #end\n\n",
    )?;
    writeln!(w, "#macro bond2({SPLIT})")?;
    write_midpoint(w)?;
    w.write_all(
        b" cylinder{<X1,Y1,Z1>,<xc,yc,zc>,RADIUS\n\
          \x20 pigment{rgb<R1,G1,B1>}}\n\
          \x20cylinder{<xc,yc,zc>,<X2,Y2,Z2>,RADIUS\n\
          \x20 pigment{rgb<R2,G2,B2>}}\n\
          \x20sphere{<X1,Y1,Z1>,RADIUS\n\
          \x20 pigment{rgb<R1,G1,B1>}}\n\
          \x20sphere{<X2,Y2,Z2>,RADIUS\n\
          \x20 pigment{rgb<R2,G2,B2>}}\n\
          #end\n\n",
    )
}

fn write_double_bond<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "#macro dblbond1({SAME})")?;
    write_offset(w, "3/2")?;
    write_strand(w, '+', SAME_TAIL)?;
    write_strand(w, '-', SAME_TAIL)?;
    w.write_all(b"#end\n\n")?;

    writeln!(w, "#macro dblbond2({SPLIT})")?;
    write_offset(w, "3/2")?;
    write_strand(w, '+', SPLIT_TAIL)?;
    write_strand(w, '-', SPLIT_TAIL)?;
    w.write_all(b"#end\n\n")
}

fn write_triple_bond<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "#macro trpbond1({SAME})")?;
    write_offset(w, "5/2")?;
    write_strand(w, '+', SAME_TAIL)?;
    write_strand(w, ' ', SAME_TAIL)?;
    write_strand(w, '-', SAME_TAIL)?;
    w.write_all(b"#end\n\n")?;

    writeln!(w, "#macro trpbond2({SPLIT})")?;
    write_offset(w, "5/2")?;
    write_strand(w, '+', SPLIT_TAIL)?;
    write_strand(w, ' ', SPLIT_TAIL)?;
    write_strand(w, '-', SPLIT_TAIL)?;
    w.write_all(b"#end\n\n")
}

// Three dashes over the 1st-3rd, 4th-6th and 7th-9th tenths of the bond.
fn write_hydrogen_bond<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "#macro hbond1({SAME})")?;
    write_step(w, 10)?;
    w.write_all(
        b" cylinder{<X1+dx,Y1+dy,Z1+dz>,<X1+3*dx,Y1+3*dy,Z1+3*dz>,RADIUS\n\
          \x20 pigment{rgb<R,G,B>}}\n\
          \x20cylinder{<X1+4*dx,Y1+4*dy,Z1+4*dz>,<X2-4*dx,Y2-4*dy,Z2-4*dz>,RADIUS\n\
          \x20 pigment{rgb<R,G,B>}}\n\
          \x20cylinder{<X2-3*dx,Y2-3*dy,Z2-3*dz>,<X2-dx,Y2-dy,Z2-dz>,RADIUS\n\
          \x20 pigment{rgb<R,G,B>}}\n\
          #end\n\n",
    )?;

    writeln!(w, "#macro hbond2({SPLIT})")?;
    write_step(w, 10)?;
    write_midpoint(w)?;
    w.write_all(
        b" cylinder{<X1+dx,Y1+dy,Z1+dz>,<X1+3*dx,Y1+3*dy,Z1+3*dz>,RADIUS\n\
          \x20 pigment{rgb<R1,G1,B1>}}\n\
          \x20cylinder{<X1+4*dx,Y1+4*dy,Z1+4*dz>,<xc,yc,zc>,RADIUS\n\
          \x20 pigment{rgb<R1,G1,B1>}}\n\
          \x20cylinder{<xc,yc,zc>,<X2-4*dx,Y2-4*dy,Z2-4*dz>,RADIUS\n\
          \x20 pigment{rgb<R2,G2,B2>}}\n\
          \x20cylinder{<X2-3*dx,Y2-3*dy,Z2-3*dz>,<X2-dx,Y2-dy,Z2-dz>,RADIUS\n\
          \x20 pigment{rgb<R2,G2,B2>}}\n\
          #end\n\n",
    )
}

// Full strand at -offset, plus a dash on the bond axis over the 2nd-5th
// twelfths at each end.
fn write_aromatic_bond<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "#macro abond1({SAME})")?;
    write_offset(w, "3/2")?;
    write_step(w, 12)?;
    write_strand(w, '-', SAME_TAIL)?;
    w.write_all(
        b" cylinder{<X1+2*dx,Y1+2*dy,Z1+2*dz>,<X1+5*dx,Y1+5*dy,Z1+5*dz>,RADIUS\n\
          \x20 pigment{rgb<R,G,B>}}\n\
          \x20cylinder{<X2-5*dx,Y2-5*dy,Z2-5*dz>,<X2-2*dx,Y2-2*dy,Z2-2*dz>,RADIUS\n\
          \x20 pigment{rgb<R,G,B>}}\n\
          #end\n\n",
    )?;

    writeln!(w, "#macro abond2({SPLIT})")?;
    write_offset(w, "3/2")?;
    write_step(w, 12)?;
    write_strand(w, '-', SPLIT_TAIL)?;
    w.write_all(
        b" cylinder{<X1+2*dx,Y1+2*dy,Z1+2*dz>,<X1+5*dx,Y1+5*dy,Z1+5*dz>,RADIUS\n\
          \x20 pigment{rgb<R1,G1,B1>}}\n\
          \x20cylinder{<X2-5*dx,Y2-5*dy,Z2-5*dz>,<X2-2*dx,Y2-2*dy,Z2-2*dz>,RADIUS\n\
          \x20 pigment{rgb<R2,G2,B2>}}\n\
          #end\n\n",
    )
}

const SAME_TAIL: &str = "RADIUS,R,G,B";
const SPLIT_TAIL: &str = "RADIUS,R1,G1,B1,R2,G2,B2";

/// `offX`/`offY` locals: the xy perpendicular of the bond scaled to
/// `factor * RADIUS`, falling back to `(0, separation)` when the bond has
/// no xy extent.
fn write_offset<W: Write>(w: &mut W, factor: &str) -> io::Result<()> {
    write!(
        w,
        "#local offDX = X2 - X1;\n\
         #local offDY = Y2 - Y1;\n\
         #local mag2d = sqrt(offDX*offDX + offDY*offDY);\n\
         #local separation = {factor} * RADIUS;\n\
         #if (mag2d > 0)\n\
         \x20#local offX = separation * offDY / mag2d;\n\
         \x20#local offY = separation * -offDX / mag2d;\n\
         #else\n\
         \x20#local offX = 0;\n\
         \x20#local offY = separation;\n\
         #end\n"
    )
}

/// `dx`/`dy`/`dz` locals: the bond vector divided into `parts` steps.
fn write_step<W: Write>(w: &mut W, parts: u32) -> io::Result<()> {
    write!(
        w,
        "#local dx = (X2 - X1) / {parts};\n\
         #local dy = (Y2 - Y1) / {parts};\n\
         #local dz = (Z2 - Z1) / {parts};\n"
    )
}

fn write_midpoint<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(
        b"#local xc = (X1 + X2) / 2;\n\
          #local yc = (Y1 + Y2) / 2;\n\
          #local zc = (Z1 + Z2) / 2;\n",
    )
}

/// One `bond1`/`bond2` strand shifted by `sign` times the offset; `' '`
/// draws the unshifted centre strand.
fn write_strand<W: Write>(w: &mut W, sign: char, tail: &str) -> io::Result<()> {
    let variant = if tail == SAME_TAIL { '1' } else { '2' };
    if sign == ' ' {
        writeln!(w, " bond{variant}(X1,Y1,Z1,X2,Y2,Z2,{tail})")
    } else {
        writeln!(
            w,
            " bond{variant}(X1{sign}offX,Y1{sign}offY,Z1,X2{sign}offX,Y2{sign}offY,Z2,{tail})"
        )
    }
}
