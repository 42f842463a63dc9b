//! Edge types
//!
//! An edge draws the border of a part along the local x axis, from the
//! current position to `(length, 0)`, leaving the canvas heading
//! unchanged. What happens in between is the edge's business: joints
//! stick out into the margin or cut into the part.
//!
//! Edges are looked up by a one-character code in the canvas registry;
//! counterpart pairs (tabs and notches, tails and recesses) share one
//! settings bundle so a single override retunes both sides.

pub mod dovetail;
pub mod finger;
pub mod flex;

use crate::bolts::BoltPolicy;
use crate::canvas::Canvas;
use kerfkit_core::Result;

/// A pluggable border generator
pub trait Edge: std::fmt::Debug {
    /// Registry code of this edge.
    fn code(&self) -> char;

    /// Human readable description.
    fn description(&self) -> &'static str;

    /// Material the edge consumes perpendicular to the border, inside
    /// the part, at its start.
    fn width(&self) -> f64 {
        0.0
    }

    /// Same as [`Edge::width`] at the far end of the border.
    fn end_width(&self) -> f64 {
        self.width()
    }

    /// Clearance needed beyond the width, outside the part.
    fn margin(&self) -> f64 {
        0.0
    }

    /// Total perpendicular space the edge occupies.
    fn spacing(&self) -> f64 {
        self.width() + self.margin()
    }

    /// Angle the edge leaves the corner with at its start, degrees.
    fn start_angle(&self) -> f64 {
        0.0
    }

    /// Angle the edge arrives at the far corner with, degrees.
    fn end_angle(&self) -> f64 {
        0.0
    }

    /// Draw the border over `length` mm, honoring an optional bed bolt
    /// policy.
    fn draw(&self, canvas: &mut Canvas, length: f64, bolts: Option<&dyn BoltPolicy>)
        -> Result<()>;
}

/// Straight edge ('e')
///
/// With a bolt policy the edge is split into equal intervals, each
/// carrying a bed bolt slot.
#[derive(Debug, Clone, Copy)]
pub struct PlainEdge;

impl Edge for PlainEdge {
    fn code(&self) -> char {
        'e'
    }

    fn description(&self) -> &'static str {
        "Straight Edge"
    }

    fn draw(
        &self,
        canvas: &mut Canvas,
        length: f64,
        bolts: Option<&dyn BoltPolicy>,
    ) -> Result<()> {
        match bolts {
            Some(b) if b.bolt_count() > 0 => {
                let interval = length / b.bolt_count() as f64;
                for _ in 0..b.bolt_count() {
                    canvas.bed_bolt_hole(interval, None);
                }
            }
            _ => canvas.edge(length),
        }
        Ok(())
    }
}

/// Straight edge set out by one thickness ('E')
///
/// The mating side of a plain edge: the wall face it meets passes over
/// this edge, so the border claims one thickness of width. Bolt shaft
/// holes are drilled half a thickness inside.
#[derive(Debug, Clone, Copy)]
pub struct OutsetEdge {
    thickness: f64,
}

impl OutsetEdge {
    /// Outset edge for the given material thickness.
    pub fn new(thickness: f64) -> Self {
        Self { thickness }
    }
}

impl Edge for OutsetEdge {
    fn code(&self) -> char {
        'E'
    }

    fn description(&self) -> &'static str {
        "Straight Edge (outset by thickness)"
    }

    fn width(&self) -> f64 {
        self.thickness
    }

    fn draw(
        &self,
        canvas: &mut Canvas,
        length: f64,
        bolts: Option<&dyn BoltPolicy>,
    ) -> Result<()> {
        match bolts {
            Some(b) if b.bolt_count() > 0 => {
                let interval = length / b.bolt_count() as f64;
                let d = canvas.bed_bolt().d;
                let t = self.thickness;
                for _ in 0..b.bolt_count() {
                    canvas.hole(0.5 * interval, 0.5 * t, 0.5 * d);
                    canvas.edge(interval);
                }
            }
            _ => canvas.edge(length),
        }
        Ok(())
    }
}
