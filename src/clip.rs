//! Cohen-Sutherland line clipping against an axis-aligned rectangle.
//!
//! # Algorithm Overview
//!
//! Each endpoint is classified by a 4-bit outcode recording which side(s) of
//! the rectangle it lies on. Two outcodes decide a segment's fate cheaply:
//!
//! - both zero: the segment is entirely inside (trivial accept)
//! - bitwise AND nonzero: both endpoints share an outside region, so the
//!   segment cannot cross the rectangle (trivial reject)
//!
//! Anything else is cut down iteratively: pick an outside endpoint, slide it
//! to the intersection with one violated boundary, reclassify, repeat. Every
//! iteration clears at least one outcode bit, so the loop always lands in one
//! of the two trivial cases.
//!
//! ```text
//!   1001 | 1000 | 1010
//!  ------+------+------
//!   0001 | 0000 | 0010
//!  ------+------+------
//!   0101 | 0100 | 0110
//! ```
//!
//! # References
//!
//! - Hearn & Baker, "Computer Graphics with OpenGL"

use std::ops::{BitAnd, BitOr};

use crate::math::vec2::Vec2;

/// Bit-set classifying a point's position relative to a [`ClipRect`].
///
/// Bits are independent: a point outside a corner carries two bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OutCode(u8);

impl OutCode {
    pub const INSIDE: OutCode = OutCode(0);
    pub const LEFT: OutCode = OutCode(1);
    pub const RIGHT: OutCode = OutCode(2);
    pub const BOTTOM: OutCode = OutCode(4);
    pub const TOP: OutCode = OutCode(8);

    /// True when no boundary is violated.
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True when this code has any bit of `flag` set.
    pub fn intersects(self, flag: OutCode) -> bool {
        self.0 & flag.0 != 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for OutCode {
    type Output = OutCode;

    fn bitor(self, rhs: OutCode) -> OutCode {
        OutCode(self.0 | rhs.0)
    }
}

impl BitAnd for OutCode {
    type Output = OutCode;

    fn bitand(self, rhs: OutCode) -> OutCode {
        OutCode(self.0 & rhs.0)
    }
}

/// A line segment between two real-valued endpoints.
///
/// Clipping may replace either endpoint with a boundary intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment2 {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// Axis-aligned clip rectangle.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl ClipRect {
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        debug_assert!(x_min <= x_max && y_min <= y_max, "inverted clip rectangle");
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Classifies a point against the four boundaries.
    ///
    /// Points exactly on a boundary count as inside for that boundary.
    pub fn outcode(&self, p: Vec2) -> OutCode {
        let mut code = OutCode::INSIDE;
        if p.x < self.x_min {
            code = code | OutCode::LEFT;
        } else if p.x > self.x_max {
            code = code | OutCode::RIGHT;
        }
        if p.y < self.y_min {
            code = code | OutCode::BOTTOM;
        } else if p.y > self.y_max {
            code = code | OutCode::TOP;
        }
        code
    }

    /// Clips a segment to the rectangle.
    ///
    /// Returns the visible sub-segment, the unchanged input when it is
    /// already fully inside, or `None` when nothing of it is visible.
    pub fn clip_segment(&self, segment: Segment2) -> Option<Segment2> {
        let mut p1 = segment.start;
        let mut p2 = segment.end;
        let mut code1 = self.outcode(p1);
        let mut code2 = self.outcode(p2);

        loop {
            if code1.is_inside() && code2.is_inside() {
                return Some(Segment2::new(p1, p2));
            }
            if !(code1 & code2).is_inside() {
                return None;
            }

            // Prefer moving the first endpoint when both are outside.
            let out = if !code1.is_inside() { code1 } else { code2 };
            let intersection = self.boundary_intersection(p1, p2, out)?;

            if out == code1 {
                p1 = intersection;
                code1 = self.outcode(p1);
            } else {
                p2 = intersection;
                code2 = self.outcode(p2);
            }
        }
    }

    /// Intersects the line through `p1`/`p2` with the single boundary the
    /// outcode names, testing top, bottom, right, left in that order.
    ///
    /// The outcode only flags a boundary when the corresponding coordinate
    /// delta is nonzero, so the divisions below cannot hit an exact zero;
    /// the near-zero guards cover pathological float inputs anyway.
    fn boundary_intersection(&self, p1: Vec2, p2: Vec2, out: OutCode) -> Option<Vec2> {
        let d = p2 - p1;

        if out.intersects(OutCode::TOP) {
            if d.y.abs() < f32::EPSILON {
                return None;
            }
            Some(Vec2::new(
                p1.x + d.x * (self.y_max - p1.y) / d.y,
                self.y_max,
            ))
        } else if out.intersects(OutCode::BOTTOM) {
            if d.y.abs() < f32::EPSILON {
                return None;
            }
            Some(Vec2::new(
                p1.x + d.x * (self.y_min - p1.y) / d.y,
                self.y_min,
            ))
        } else if out.intersects(OutCode::RIGHT) {
            if d.x.abs() < f32::EPSILON {
                return None;
            }
            Some(Vec2::new(
                self.x_max,
                p1.y + d.y * (self.x_max - p1.x) / d.x,
            ))
        } else {
            if d.x.abs() < f32::EPSILON {
                return None;
            }
            Some(Vec2::new(
                self.x_min,
                p1.y + d.y * (self.x_min - p1.x) / d.x,
            ))
        }
    }
}
