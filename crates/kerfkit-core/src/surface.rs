//! Path surface
//!
//! The drawing target of the engine: an ordered stream of absolute path
//! commands in world coordinates. The surface knows nothing about kerf,
//! edges or parts; it records what it is told, tracks the current point,
//! computes bounds and serializes to SVG.
//!
//! Determinism contract: the same command sequence always serializes to
//! byte-identical output.

use crate::geom::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt::Write as _;

/// A single absolute path command (coordinates in mm, angles in radians)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Straight segment to the given point.
    LineTo(Point),
    /// Circular arc around `center`. The arc starts at angle `start`
    /// and sweeps to `end`, counterclockwise when `ccw` is set.
    Arc {
        /// Arc center.
        center: Point,
        /// Arc radius.
        radius: f64,
        /// Start angle in radians.
        start: f64,
        /// End angle in radians.
        end: f64,
        /// Sweep direction.
        ccw: bool,
    },
    /// Cubic Bezier segment with two control points and an end point.
    CurveTo(Point, Point, Point),
}

impl PathCommand {
    /// The point the pen is at after executing this command.
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::Arc {
                center,
                radius,
                end,
                ..
            } => center + Point::new(radius * end.cos(), radius * end.sin()),
            PathCommand::CurveTo(_, _, p) => p,
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower-left corner.
    pub min: Point,
    /// Upper-right corner.
    pub max: Point,
}

impl Bounds {
    fn at(p: Point) -> Self {
        Self { min: p, max: p }
    }

    fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Recording path surface
///
/// The pen starts at the origin. Commands append in call order and the
/// current point always reflects the last command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    commands: Vec<PathCommand>,
    current: Point,
}

impl Surface {
    /// Create an empty surface with the pen at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in draw order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The current pen position.
    pub fn current_point(&self) -> Point {
        self.current
    }

    /// Start a new subpath.
    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
        self.current = p;
    }

    /// Straight segment from the current point.
    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
        self.current = p;
    }

    /// Counterclockwise arc around `center` from angle `start` to `end`.
    /// The caller is responsible for the arc starting at the current point.
    pub fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        self.push_arc(center, radius, start, end, true);
    }

    /// Clockwise arc around `center` from angle `start` to `end`.
    pub fn arc_negative(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        self.push_arc(center, radius, start, end, false);
    }

    fn push_arc(&mut self, center: Point, radius: f64, start: f64, end: f64, ccw: bool) {
        let cmd = PathCommand::Arc {
            center,
            radius,
            start,
            end,
            ccw,
        };
        self.current = cmd.end_point();
        self.commands.push(cmd);
    }

    /// Cubic Bezier segment from the current point.
    pub fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.commands.push(PathCommand::CurveTo(c1, c2, p));
        self.current = p;
    }

    /// Bounding box of everything drawn, `None` when nothing is drawn.
    ///
    /// A `MoveTo` only positions the pen; it enters the bounds through
    /// the drawing command that follows it, so detached pen moves do
    /// not inflate the box. Arcs contribute their true extrema; curves
    /// contribute their control polygon, which is a conservative hull.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut pos = Point::ZERO;
        let mut bounds: Option<Bounds> = None;
        let mut add = |b: &mut Option<Bounds>, p: Point| match b {
            Some(b) => b.include(p),
            None => *b = Some(Bounds::at(p)),
        };
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(_) => {}
                PathCommand::LineTo(p) => {
                    add(&mut bounds, pos);
                    add(&mut bounds, p);
                }
                PathCommand::Arc {
                    center,
                    radius,
                    start,
                    end,
                    ccw,
                } => {
                    for p in arc_extrema(center, radius, start, end, ccw) {
                        add(&mut bounds, p);
                    }
                }
                PathCommand::CurveTo(c1, c2, p) => {
                    add(&mut bounds, pos);
                    add(&mut bounds, c1);
                    add(&mut bounds, c2);
                    add(&mut bounds, p);
                }
            }
            pos = cmd.end_point();
        }
        bounds
    }

    /// Serialize to SVG path data (the `d` attribute).
    ///
    /// Coordinates are written with three decimals in mm. A leading
    /// move is synthesized when the stream starts with a draw command.
    pub fn svg_path_data(&self) -> String {
        let mut d = String::new();
        let mut pos = Point::ZERO;
        let mut open = false;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    push_cmd(&mut d, 'M', &[p.x, p.y]);
                    open = true;
                }
                PathCommand::LineTo(p) => {
                    if !open {
                        push_cmd(&mut d, 'M', &[pos.x, pos.y]);
                        open = true;
                    }
                    push_cmd(&mut d, 'L', &[p.x, p.y]);
                }
                PathCommand::Arc {
                    center,
                    radius,
                    start,
                    end,
                    ccw,
                } => {
                    if !open {
                        push_cmd(&mut d, 'M', &[pos.x, pos.y]);
                        open = true;
                    }
                    push_svg_arc(&mut d, center, radius, start, end, ccw);
                }
                PathCommand::CurveTo(c1, c2, p) => {
                    if !open {
                        push_cmd(&mut d, 'M', &[pos.x, pos.y]);
                        open = true;
                    }
                    push_cmd(&mut d, 'C', &[c1.x, c1.y, c2.x, c2.y, p.x, p.y]);
                }
            }
            pos = cmd.end_point();
        }
        d
    }

    /// Serialize to a standalone SVG document with a 5 mm margin.
    ///
    /// The drawing uses a y-up coordinate system; the document flips it
    /// so the output renders the way the part is laid out.
    pub fn to_svg_document(&self) -> String {
        const MARGIN: f64 = 5.0;
        let bounds = self.bounds().unwrap_or(Bounds {
            min: Point::ZERO,
            max: Point::ZERO,
        });
        let width = bounds.width() + 2.0 * MARGIN;
        let height = bounds.height() + 2.0 * MARGIN;
        let tx = MARGIN - bounds.min.x;
        let ty = MARGIN + bounds.max.y;
        format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
                "width=\"{w:.3}mm\" height=\"{h:.3}mm\" ",
                "viewBox=\"0 0 {w:.3} {h:.3}\">\n",
                "<g transform=\"translate({tx:.3} {ty:.3}) scale(1 -1)\">\n",
                "<path d=\"{d}\" fill=\"none\" stroke=\"black\" stroke-width=\"0.1\"/>\n",
                "</g>\n</svg>\n"
            ),
            w = width,
            h = height,
            tx = tx,
            ty = ty,
            d = self.svg_path_data(),
        )
    }
}

fn push_cmd(d: &mut String, op: char, args: &[f64]) {
    if !d.is_empty() {
        d.push(' ');
    }
    d.push(op);
    for a in args {
        // -0.000 and 0.000 must serialize identically
        let a = if *a == 0.0 { 0.0 } else { *a };
        let _ = write!(d, " {:.3}", a);
    }
}

fn push_svg_arc(d: &mut String, center: Point, radius: f64, start: f64, end: f64, ccw: bool) {
    let sweep = if ccw { end - start } else { start - end };
    let sweep = sweep.rem_euclid(2.0 * PI);
    let full_circle = sweep < 1e-12 && (end - start).abs() > 1e-12;
    // SVG cannot express a full circle as one arc; split in halves.
    let mut parts: Vec<(f64, f64)> = Vec::with_capacity(2);
    if full_circle {
        let mid = if ccw { start + PI } else { start - PI };
        parts.push((start, mid));
        parts.push((mid, end));
    } else {
        parts.push((start, end));
    }
    for (a0, a1) in parts {
        let p = center + Point::new(radius * a1.cos(), radius * a1.sin());
        let seg = if ccw { a1 - a0 } else { a0 - a1 };
        let large = seg.rem_euclid(2.0 * PI) > PI;
        // In SVG's y-down frame a math-ccw arc sweeps negative.
        let sweep_flag = if ccw { 0 } else { 1 };
        push_cmd(d, 'A', &[radius, radius]);
        let _ = write!(
            d,
            " 0 {} {} {:.3} {:.3}",
            large as u8,
            sweep_flag,
            if p.x == 0.0 { 0.0 } else { p.x },
            if p.y == 0.0 { 0.0 } else { p.y }
        );
    }
}

/// Points bounding an arc: both endpoints plus every axis extremum
/// inside the swept range.
fn arc_extrema(center: Point, radius: f64, start: f64, end: f64, ccw: bool) -> Vec<Point> {
    let at = |a: f64| center + Point::new(radius * a.cos(), radius * a.sin());
    let mut pts = vec![at(start), at(end)];
    // Normalize to a counterclockwise range [a0, a1].
    let (a0, raw_sweep) = if ccw {
        (start, end - start)
    } else {
        (end, start - end)
    };
    let mut sweep = raw_sweep.rem_euclid(2.0 * PI);
    if sweep < 1e-12 && raw_sweep.abs() > 1e-12 {
        sweep = 2.0 * PI;
    }
    let a1 = a0 + sweep;
    let mut k = (a0 / FRAC_PI_2).ceil();
    while k * FRAC_PI_2 <= a1 {
        pts.push(at(k * FRAC_PI_2));
        k += 1.0;
    }
    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_point_tracks_commands() {
        let mut s = Surface::new();
        assert_eq!(s.current_point(), Point::ZERO);
        s.move_to(Point::new(1.0, 2.0));
        s.line_to(Point::new(4.0, 2.0));
        assert_eq!(s.current_point(), Point::new(4.0, 2.0));
        // Quarter arc ends on the circle at the end angle.
        s.arc(Point::new(4.0, 3.0), 1.0, -FRAC_PI_2, 0.0);
        let p = s.current_point();
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!((p.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_of_lines() {
        let mut s = Surface::new();
        s.move_to(Point::new(1.0, 1.0));
        s.line_to(Point::new(11.0, 1.0));
        s.line_to(Point::new(11.0, 6.0));
        let b = s.bounds().unwrap();
        assert_eq!(b.min, Point::new(1.0, 1.0));
        assert_eq!(b.max, Point::new(11.0, 6.0));
    }

    #[test]
    fn test_bounds_include_arc_extrema() {
        // Half circle around the origin from 0 to pi reaches y = r.
        let mut s = Surface::new();
        s.move_to(Point::new(2.0, 0.0));
        s.arc(Point::ZERO, 2.0, 0.0, PI);
        let b = s.bounds().unwrap();
        assert!((b.max.y - 2.0).abs() < 1e-12);
        assert!((b.min.x + 2.0).abs() < 1e-12);
        assert!(b.min.y.abs() < 1e-12);
    }

    #[test]
    fn test_full_circle_bounds() {
        let mut s = Surface::new();
        s.move_to(Point::new(3.0, 0.0));
        s.arc_negative(Point::ZERO, 3.0, 0.0, -2.0 * PI);
        let b = s.bounds().unwrap();
        assert!((b.width() - 6.0).abs() < 1e-12);
        assert!((b.height() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_pen_moves_do_not_inflate_bounds() {
        // a detached reposition after drawing leaves the box untouched
        let mut s = Surface::new();
        s.move_to(Point::new(5.0, 5.0));
        s.line_to(Point::new(6.0, 5.0));
        s.move_to(Point::new(100.0, 100.0));
        let b = s.bounds().unwrap();
        assert_eq!(b.min, Point::new(5.0, 5.0));
        assert_eq!(b.max, Point::new(6.0, 5.0));
        // moves alone draw nothing
        let mut s = Surface::new();
        s.move_to(Point::new(3.0, 3.0));
        assert!(s.bounds().is_none());
    }

    #[test]
    fn test_svg_path_data_synthesizes_leading_move() {
        let mut s = Surface::new();
        s.line_to(Point::new(5.0, 0.0));
        assert_eq!(s.svg_path_data(), "M 0.000 0.000 L 5.000 0.000");
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let build = || {
            let mut s = Surface::new();
            s.move_to(Point::new(0.5, 0.25));
            s.line_to(Point::new(10.0, 0.25));
            s.arc(Point::new(10.0, 1.25), 1.0, -FRAC_PI_2, 0.0);
            s.curve_to(
                Point::new(12.0, 2.0),
                Point::new(12.0, 4.0),
                Point::new(11.0, 5.0),
            );
            s
        };
        let a = build();
        let b = build();
        assert_eq!(a, b);
        assert_eq!(a.to_svg_document(), b.to_svg_document());
    }

    #[test]
    fn test_svg_document_contains_viewbox() {
        let mut s = Surface::new();
        s.move_to(Point::ZERO);
        s.line_to(Point::new(10.0, 0.0));
        let doc = s.to_svg_document();
        assert!(doc.contains("viewBox=\"0 0 20.000 10.000\""));
        assert!(doc.contains("stroke=\"black\""));
    }

    #[test]
    fn test_commands_roundtrip_through_json() {
        let mut s = Surface::new();
        s.move_to(Point::new(1.0, 2.0));
        s.arc(Point::new(1.0, 3.0), 1.0, -FRAC_PI_2, 0.0);
        let json = serde_json::to_string(&s).unwrap();
        let back: Surface = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
