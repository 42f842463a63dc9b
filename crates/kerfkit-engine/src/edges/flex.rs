//! Living hinge slit field
//!
//! Columns of vertical slits, phase shifted between odd and even
//! columns, let flat stock bend around a corner. The field covers a
//! rectangle of `length` by `height` and finishes with the straight
//! base line, so the part outline continues as with any other edge.
//! Use a straight edge for the opposing side.

use crate::canvas::Canvas;
use crate::settings::FlexSettings;
use kerfkit_core::Shared;

/// Flex cut building block
///
/// Not part of the one-character edge registry: drawing needs the
/// height of the bend in addition to the length.
#[derive(Debug, Clone)]
pub struct FlexEdge {
    settings: Shared<FlexSettings>,
}

impl FlexEdge {
    /// Flex field drawing from the given shared settings.
    pub fn new(settings: Shared<FlexSettings>) -> Self {
        Self { settings }
    }

    /// Human readable description.
    pub fn description(&self) -> &'static str {
        "Flex cut"
    }

    /// Draw slits over `x` by `h` mm, then the base line of length `x`.
    pub fn draw(&self, canvas: &mut Canvas, x: f64, h: f64) {
        let s = *self.settings.borrow();
        let dist = s.distance;
        let connection = s.connection;
        let width = s.width;

        let h = h + 2.0 * canvas.burn();
        let lines = (x / dist).floor() as usize;
        let leftover = x - lines as f64 * dist;
        let sections = (((h - connection) / width).floor() as usize).max(1);
        let sheight = (h - connection) / sections as f64 - connection;

        for i in 1..lines {
            let pos = i as f64 * dist + leftover / 2.0;
            let mut slits: Vec<(f64, f64)> = Vec::new();
            if i % 2 == 1 {
                slits.push((0.0, connection + sheight));
                for j in 0..(sections - 1) / 2 {
                    let j = j as f64;
                    slits.push((
                        (2.0 * j + 1.0) * sheight + (2.0 * j + 2.0) * connection,
                        (2.0 * j + 3.0) * (sheight + connection),
                    ));
                }
                if sections % 2 == 0 {
                    slits.push((h - sheight - connection, h));
                }
            } else if sections % 2 == 1 {
                slits.push((h, h - connection - sheight));
                for j in 0..(sections - 1) / 2 {
                    let j = j as f64;
                    slits.push((
                        h - ((2.0 * j + 1.0) * sheight + (2.0 * j + 2.0) * connection),
                        h - (2.0 * j + 3.0) * (sheight + connection),
                    ));
                }
            } else {
                for j in 0..sections / 2 {
                    let j = j as f64;
                    slits.push((
                        h - connection - 2.0 * j * (sheight + connection),
                        h - 2.0 * (j + 1.0) * (sheight + connection),
                    ));
                }
            }
            for (from, to) in slits {
                let mut c = canvas.saved();
                c.move_to(pos, from, 90.0);
                c.edge(to - from);
            }
        }
        canvas.edge(x);
    }
}
