//! Number formatting shared by every emitter.

use std::fmt;

/// Displays an `f32` the way the scene language expects it.
///
/// Uses the shortest representation that round-trips, so integral values
/// print without a fraction (`1`, not `1.0`). Negative zero prints as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Comma-joined `x,y,z` triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triple(pub [f32; 3]);

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "{},{},{}", Num(x), Num(y), Num(z))
    }
}
