//! Turtle drawing canvas
//!
//! The canvas keeps a cursor (position plus heading) and draws onto a
//! [`Surface`] in world coordinates. All drawing primitives work in the
//! cursor's local frame: `edge` draws along the local x axis, `corner`
//! turns in place. After every drawing primitive the frame origin sits
//! on the surface's current point.
//!
//! Kerf compensation happens in exactly one place: `corner` picks the
//! drawn radius from the turn direction. Outlines therefore grow by the
//! burn correction without any caller involvement.

use crate::bolts::BoltPolicy;
use crate::edges::dovetail::DovetailEdge;
use crate::edges::finger::{FingerHoleEdge, FingerHoles, FingerJointEdge};
use crate::edges::flex::FlexEdge;
use crate::edges::{Edge, OutsetEdge, PlainEdge};
use crate::settings::{BedBoltSettings, DovetailSettings, FingerJointSettings, FlexSettings};
use kerfkit_core::{shared, EngineError, Point, Result, Shared, Surface};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_2;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;
use tracing::debug;

/// Canvas construction parameters
///
/// Edge settings overrides are name/value pairs in the relative scheme
/// (values in multiples of thickness where the parameter is relative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Material thickness in mm.
    pub thickness: f64,
    /// Kerf compensation in mm (half the cut width).
    pub burn: f64,
    /// Bed bolt slot dimensions.
    pub bed_bolt: BedBoltSettings,
    /// Finger joint parameter overrides.
    pub finger_joint: Vec<(String, f64)>,
    /// Dovetail parameter overrides.
    pub dovetail: Vec<(String, f64)>,
    /// Living hinge parameter overrides.
    pub flex: Vec<(String, f64)>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            thickness: 3.0,
            burn: 0.1,
            bed_bolt: BedBoltSettings::default(),
            finger_joint: Vec::new(),
            dovetail: Vec::new(),
            flex: Vec::new(),
        }
    }
}

/// One step of a polyline: a straight run or a turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolyStep {
    /// Straight segment of the given length.
    Edge(f64),
    /// Turn by degrees with a rounding radius.
    Corner(f64, f64),
}

/// Rigid transform from the cursor's local frame to world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    origin: Point,
    angle: f64,
}

impl Transform {
    fn to_world(&self, p: Point) -> Point {
        self.origin + p.rotated(self.angle)
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    transform: Transform,
    point: Point,
}

/// Turtle drawing canvas with a kerf-compensating pen
pub struct Canvas {
    surface: Surface,
    transform: Transform,
    stack: Vec<Frame>,
    thickness: f64,
    burn: f64,
    spacing: f64,
    bed_bolt: BedBoltSettings,
    finger_settings: Shared<FingerJointSettings>,
    dovetail_settings: Shared<DovetailSettings>,
    flex_settings: Shared<FlexSettings>,
    edges: BTreeMap<char, Rc<dyn Edge>>,
    flex: FlexEdge,
}

impl Canvas {
    /// Build a canvas and its edge registry from a configuration.
    ///
    /// The registry is fixed afterwards; joint tuning goes through the
    /// shared settings bundles, which counterpart edges observe
    /// immediately.
    pub fn new(config: CanvasConfig) -> Result<Self> {
        let t = config.thickness;
        let finger = shared(FingerJointSettings::with_values(
            t,
            true,
            &borrow_overrides(&config.finger_joint),
        )?);
        let dovetail = shared(DovetailSettings::with_values(
            t,
            true,
            &borrow_overrides(&config.dovetail),
        )?);
        let flex_settings = shared(FlexSettings::with_values(
            t,
            true,
            &borrow_overrides(&config.flex),
        )?);

        let mut edges: BTreeMap<char, Rc<dyn Edge>> = BTreeMap::new();
        edges.insert('e', Rc::new(PlainEdge));
        edges.insert('E', Rc::new(OutsetEdge::new(t)));
        edges.insert('f', Rc::new(FingerJointEdge::tabs(finger.clone())));
        edges.insert('F', Rc::new(FingerJointEdge::notches(finger.clone())));
        edges.insert('h', Rc::new(FingerHoleEdge::new(finger.clone())));
        edges.insert('d', Rc::new(DovetailEdge::tails(dovetail.clone())));
        edges.insert('D', Rc::new(DovetailEdge::recesses(dovetail.clone())));

        Ok(Self {
            surface: Surface::new(),
            transform: Transform {
                origin: Point::ZERO,
                angle: 0.0,
            },
            stack: Vec::new(),
            thickness: t,
            burn: config.burn,
            spacing: 2.0 * config.burn + 0.5 * t,
            bed_bolt: config.bed_bolt,
            finger_settings: finger,
            dovetail_settings: dovetail,
            flex_settings: flex_settings.clone(),
            edges,
            flex: FlexEdge::new(flex_settings),
        })
    }

    /// Material thickness in mm.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Kerf compensation in mm.
    pub fn burn(&self) -> f64 {
        self.burn
    }

    /// Gap kept between parts when moving.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Bed bolt slot dimensions.
    pub fn bed_bolt(&self) -> &BedBoltSettings {
        &self.bed_bolt
    }

    /// Shared finger joint settings ('f', 'F' and 'h').
    pub fn finger_settings(&self) -> &Shared<FingerJointSettings> {
        &self.finger_settings
    }

    /// Shared dovetail settings ('d' and 'D').
    pub fn dovetail_settings(&self) -> &Shared<DovetailSettings> {
        &self.dovetail_settings
    }

    /// Shared living hinge settings.
    pub fn flex_settings(&self) -> &Shared<FlexSettings> {
        &self.flex_settings
    }

    /// The drawing recorded so far.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Finish drawing and hand out the surface.
    pub fn into_surface(self) -> Surface {
        self.surface
    }

    /// Cursor position in world coordinates.
    pub fn position(&self) -> Point {
        self.transform.origin
    }

    /// Cursor heading in radians.
    pub fn heading(&self) -> f64 {
        self.transform.angle
    }

    /// Look up an edge by its registry code.
    pub fn edge_for(&self, code: char) -> Result<Rc<dyn Edge>> {
        self.edges
            .get(&code)
            .cloned()
            .ok_or(EngineError::UnknownEdge(code))
    }

    /// Codes and descriptions of all registered edges.
    pub fn edge_descriptions(&self) -> Vec<(char, &'static str)> {
        self.edges
            .iter()
            .map(|(c, e)| (*c, e.description()))
            .collect()
    }

    // Starts the pen at the frame origin when the last subpath ended
    // elsewhere.
    fn sync_pen(&mut self) {
        if (self.surface.current_point() - self.transform.origin).length() > 1e-9 {
            self.surface.move_to(self.transform.origin);
        }
    }

    fn continue_direction(&mut self, rad: f64) {
        self.transform.origin = self.surface.current_point();
        self.transform.angle += rad;
    }

    fn arc_local(&mut self, center: Point, radius: f64, start: f64, end: f64, ccw: bool) {
        let c = self.transform.to_world(center);
        let s = start + self.transform.angle;
        let e = end + self.transform.angle;
        if ccw {
            self.surface.arc(c, radius, s, e);
        } else {
            self.surface.arc_negative(c, radius, s, e);
        }
    }

    /// Draw a straight edge along the local x axis and advance.
    pub fn edge(&mut self, length: f64) {
        self.sync_pen();
        let p = self.transform.to_world(Point::new(length, 0.0));
        self.surface.line_to(p);
        self.transform.origin = p;
    }

    /// Turn by `degrees` with a rounding of `radius`, compensating for
    /// the kerf.
    ///
    /// Left turns draw at `radius + burn`, right turns at
    /// `radius - burn`. A right turn with a radius at or below the burn
    /// degenerates to a compensating arc of radius `burn - radius`.
    /// Turns wider than 36 degrees at more than half a thickness of
    /// radius are subdivided to keep the segments short.
    pub fn corner(&mut self, degrees: f64, radius: f64) {
        if radius > 0.5 * self.thickness && degrees.abs() > 36.0 {
            let steps = (degrees.abs() / 36.0) as usize + 1;
            let step = degrees / steps as f64;
            for _ in 0..steps {
                self.corner(step, radius);
            }
            return;
        }
        self.sync_pen();
        let rad = degrees.to_radians();
        if degrees > 0.0 {
            let r = radius + self.burn;
            self.arc_local(Point::new(0.0, r), r, -FRAC_PI_2, rad - FRAC_PI_2, true);
        } else if radius > self.burn {
            let r = radius - self.burn;
            self.arc_local(Point::new(0.0, -r), r, FRAC_PI_2, rad + FRAC_PI_2, false);
        } else {
            let r = self.burn - radius;
            self.arc_local(Point::new(0.0, r), r, -FRAC_PI_2, rad - FRAC_PI_2, false);
        }
        self.continue_direction(rad);
    }

    /// Cubic Bezier segment in local coordinates; the heading continues
    /// along the curve's exit tangent.
    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.sync_pen();
        let c1 = self.transform.to_world(Point::new(x1, y1));
        let c2 = self.transform.to_world(Point::new(x2, y2));
        let p = self.transform.to_world(Point::new(x3, y3));
        self.surface.curve_to(c1, c2, p);
        let rad = (y3 - y2).atan2(x3 - x2);
        self.continue_direction(rad);
    }

    /// Draw multiple connected lines and corners.
    pub fn polyline(&mut self, steps: &[PolyStep]) {
        for step in steps {
            match *step {
                PolyStep::Edge(l) => self.edge(l),
                PolyStep::Corner(degrees, radius) => self.corner(degrees, radius),
            }
        }
    }

    /// Move the local frame to `(x, y)` and turn it by `degrees`
    /// without drawing.
    pub fn move_to(&mut self, x: f64, y: f64, degrees: f64) {
        let origin = self.transform.to_world(Point::new(x, y));
        self.transform.origin = origin;
        self.transform.angle += degrees.to_radians();
        self.surface.move_to(origin);
    }

    /// Move the frame as if drawing a corner of the given angle and
    /// radius, without drawing.
    pub fn move_arc(&mut self, degrees: f64, r: f64) {
        let (degrees, r) = if r < 0.0 { (-degrees, -r) } else { (degrees, r) };
        let rad = degrees.to_radians();
        if degrees > 0.0 {
            self.move_to(r * rad.sin(), r * (1.0 - rad.cos()), degrees);
        } else {
            self.move_to(r * (-rad).sin(), -r * (1.0 - rad.cos()), degrees);
        }
    }

    /// Save the current frame; the guard restores frame and pen
    /// position when dropped, also on early returns.
    pub fn saved(&mut self) -> SavedContext<'_> {
        self.push_frame();
        SavedContext { canvas: self }
    }

    pub(crate) fn push_frame(&mut self) {
        self.stack.push(Frame {
            transform: self.transform,
            point: self.surface.current_point(),
        });
    }

    /// Restore the transform only; the pen stays where it is.
    pub(crate) fn pop_frame(&mut self) {
        if let Some(f) = self.stack.pop() {
            self.transform = f.transform;
        }
    }

    fn pop_frame_restore_point(&mut self) {
        if let Some(f) = self.stack.pop() {
            self.transform = f.transform;
            self.surface.move_to(f.point);
        }
    }

    /// Seam between two edge types plus the corner turn.
    ///
    /// Draws the incoming width of the next edge, turns by the corner
    /// angle minus both edges' end/start angles, then draws the
    /// outgoing width of the finished edge.
    pub fn edge_corner(&mut self, edge1: &dyn Edge, edge2: &dyn Edge, angle: f64) {
        let tan_half = (angle.to_radians() / 2.0).tan();
        self.edge(edge2.width() * tan_half);
        self.corner(angle - edge1.end_angle() - edge2.start_angle(), 0.0);
        self.edge(edge1.end_width() * tan_half);
    }

    /// Round hole of radius `r` around the local point `(x, y)`.
    ///
    /// The cut radius shrinks by the burn correction; radii below the
    /// burn are clamped to a minimal cut.
    pub fn hole(&mut self, x: f64, y: f64, r: f64) {
        let r = if r < self.burn { self.burn + 1e-9 } else { r };
        let r_ = r - self.burn;
        let mut c = self.saved();
        c.move_to(x + r_, y, -90.0);
        c.corner(-360.0, r);
    }

    /// Round hole with one flat side, for grub screws and D shafts.
    ///
    /// `rel_w` is the remaining width over the diameter; values leaving
    /// no flat fall back to a plain hole.
    pub fn d_hole(&mut self, x: f64, y: f64, r: f64, rel_w: f64, angle: f64) {
        let w = 2.0 * r * rel_w - r;
        if r < 0.0 {
            return;
        }
        if w.abs() > r {
            self.hole(x, y, r);
            return;
        }
        let a = (w / r).acos().to_degrees();
        let mut c = self.saved();
        c.move_to(x, y, angle - a);
        let burn = c.burn;
        c.move_to(r - burn, 0.0, -90.0);
        c.corner(-360.0 + 2.0 * a, r);
        c.corner(-a, 0.0);
        c.edge(2.0 * r * a.to_radians().sin());
    }

    /// Rectangular hole of `dx` by `dy` around the local point
    /// `(x, y)`, with corners rounded by `r`.
    pub fn rectangular_hole(&mut self, x: f64, y: f64, dx: f64, dy: f64, r: f64) {
        let mut c = self.saved();
        c.move_to(x + r - dx / 2.0, y - dy / 2.0, 180.0);
        for d in [dy, dx, dy, dx] {
            c.corner(-90.0, r);
            c.edge(d - 2.0 * r);
        }
    }

    /// Edge of the given length with a bed bolt slot in the middle:
    /// a T-shaped cutout holding a captive nut.
    pub fn bed_bolt_hole(&mut self, length: f64, settings: Option<&BedBoltSettings>) {
        let bb = settings.copied().unwrap_or(self.bed_bolt);
        let (d, d_nut, h_nut, l, l1) = (bb.d, bb.d_nut, bb.h_nut, bb.l, bb.l1);
        self.edge((length - d) / 2.0);
        self.corner(90.0, 0.0);
        self.edge(l1);
        self.corner(90.0, 0.0);
        self.edge((d_nut - d) / 2.0);
        self.corner(-90.0, 0.0);
        self.edge(h_nut);
        self.corner(-90.0, 0.0);
        self.edge((d_nut - d) / 2.0);
        self.corner(90.0, 0.0);
        self.edge(l - l1 - h_nut);
        self.corner(-90.0, 0.0);
        self.edge(d);
        self.corner(-90.0, 0.0);
        self.edge(l - l1 - h_nut);
        self.corner(90.0, 0.0);
        self.edge((d_nut - d) / 2.0);
        self.corner(-90.0, 0.0);
        self.edge(h_nut);
        self.corner(-90.0, 0.0);
        self.edge((d_nut - d) / 2.0);
        self.corner(90.0, 0.0);
        self.edge(l1);
        self.corner(90.0, 0.0);
        self.edge((length - d) / 2.0);
    }

    /// Row of finger holes for a T joint, using the shared finger joint
    /// settings. The row runs from `(x, y)` at `angle` degrees.
    pub fn finger_holes_at(
        &mut self,
        x: f64,
        y: f64,
        length: f64,
        angle: f64,
        bolts: Option<&dyn BoltPolicy>,
    ) -> Result<()> {
        let holes = FingerHoles::new(self.finger_settings.clone());
        holes.draw(self, x, y, length, angle, bolts)
    }

    /// Living hinge slit field of the given length and height, ending
    /// with the straight base line.
    pub fn flex(&mut self, length: f64, height: f64) {
        let edge = self.flex.clone();
        edge.draw(self, length, height);
    }

    /// Position a part and keep parts separated.
    ///
    /// `where_` is a whitespace separated combination of `up`, `down`,
    /// `left`, `right` and `only`; with `only` present the part is not
    /// drawn and only the space is taken. Called once with `before`
    /// set, and again after drawing. Returns whether drawing should be
    /// skipped.
    pub fn move_part(&mut self, x: f64, y: f64, where_: &str, before: bool) -> Result<bool> {
        let terms: Vec<&str> = where_.split_whitespace().collect();
        let dontdraw = before && terms.iter().any(|t| *t == "only");
        let x = x + self.spacing;
        let y = y + self.spacing;

        if !before {
            self.pop_frame();
        }
        for term in &terms {
            let (dx, dy, before_print) = match *term {
                "up" => (0.0, y, Some(false)),
                "down" => (0.0, -y, Some(true)),
                "left" => (-x, 0.0, Some(true)),
                "right" => (x, 0.0, Some(false)),
                "only" => (0.0, 0.0, None),
                other => return Err(EngineError::UnknownDirection(other.to_string())),
            };
            let moves = match before_print {
                Some(true) if before => true,
                Some(true) => dontdraw,
                _ => !before || dontdraw,
            };
            if moves {
                self.move_to(dx, dy, 0.0);
            }
        }
        if !dontdraw && before {
            self.push_frame();
            self.move_to(self.spacing / 2.0, self.spacing / 2.0, 0.0);
        }
        if dontdraw {
            debug!(x, y, directive = where_, "part skipped, space reserved");
        }
        Ok(dontdraw)
    }
}

/// RAII guard of [`Canvas::saved`]
///
/// Dereferences to the canvas; restores the saved frame and pen
/// position when dropped.
pub struct SavedContext<'a> {
    canvas: &'a mut Canvas,
}

impl Deref for SavedContext<'_> {
    type Target = Canvas;
    fn deref(&self) -> &Canvas {
        self.canvas
    }
}

impl DerefMut for SavedContext<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        self.canvas
    }
}

impl Drop for SavedContext<'_> {
    fn drop(&mut self) {
        self.canvas.pop_frame_restore_point();
    }
}

fn borrow_overrides(values: &[(String, f64)]) -> Vec<(&str, f64)> {
    values.iter().map(|(n, v)| (n.as_str(), *v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerfkit_core::PathCommand;
    use proptest::prelude::*;

    fn canvas(burn: f64) -> Canvas {
        Canvas::new(CanvasConfig {
            burn,
            ..CanvasConfig::default()
        })
        .unwrap()
    }

    fn assert_close(a: Point, b: Point) {
        assert!((a - b).length() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_edge_advances_along_heading() {
        let mut c = canvas(0.0);
        c.edge(10.0);
        c.corner(90.0, 0.0);
        c.edge(5.0);
        assert_close(c.position(), Point::new(10.0, 5.0));
        assert!((c.heading() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_origin_tracks_pen_after_primitives() {
        let mut c = canvas(0.1);
        c.edge(10.0);
        assert_close(c.position(), c.surface().current_point());
        c.corner(45.0, 2.0);
        assert_close(c.position(), c.surface().current_point());
        c.curve_to(1.0, 0.0, 2.0, 1.0, 3.0, 1.0);
        assert_close(c.position(), c.surface().current_point());
    }

    #[test]
    fn test_corner_radius_is_kerf_compensated() {
        let mut c = canvas(0.1);
        c.corner(90.0, 1.0);
        c.corner(-90.0, 1.0);
        c.corner(-90.0, 0.05);
        let radii: Vec<f64> = c
            .surface()
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                PathCommand::Arc { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        // left turn grows, right turn shrinks, tiny right turn flips
        assert!((radii[0] - 1.1).abs() < 1e-12);
        assert!((radii[1] - 0.9).abs() < 1e-12);
        assert!((radii[2] - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_wide_corner_is_subdivided() {
        let mut c = canvas(0.0);
        c.corner(90.0, 10.0);
        let arcs = c
            .surface()
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::Arc { .. }))
            .count();
        assert_eq!(arcs, 3);
        // the subdivided corner still ends in the right place
        assert_close(c.position(), Point::new(10.0, 10.0));
        assert!((c.heading() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_zero_radius_corner_restores_position() {
        let mut c = canvas(0.0);
        c.edge(5.0);
        let p = c.position();
        c.corner(67.0, 0.0);
        c.corner(-67.0, 0.0);
        assert_close(c.position(), p);
        assert!(c.heading().abs() < 1e-12);
    }

    #[test]
    fn test_saved_context_restores_on_early_return() {
        fn partial(c: &mut Canvas) -> Result<()> {
            let mut c = c.saved();
            c.move_to(10.0, 10.0, 45.0);
            c.edge(3.0);
            Err(EngineError::Geometry("stop".to_string()))
        }
        let mut c = canvas(0.0);
        c.edge(2.0);
        let p = c.position();
        let h = c.heading();
        assert!(partial(&mut c).is_err());
        assert_close(c.position(), p);
        assert!((c.heading() - h).abs() < 1e-12);
        assert_close(c.surface().current_point(), p);
    }

    #[test]
    fn test_saved_contexts_nest_lifo() {
        let mut c = canvas(0.0);
        {
            let mut outer = c.saved();
            outer.move_to(5.0, 0.0, 0.0);
            {
                let mut inner = outer.saved();
                inner.move_to(0.0, 5.0, 90.0);
                assert_close(inner.position(), Point::new(5.0, 5.0));
            }
            assert_close(outer.position(), Point::new(5.0, 0.0));
        }
        assert_close(c.position(), Point::ZERO);
    }

    #[test]
    fn test_hole_is_a_detached_subpath() {
        let mut c = canvas(0.05);
        c.edge(10.0);
        c.hole(5.0, -3.0, 2.0);
        c.edge(10.0);
        // hole starts with its own move and the outline resumes after
        let cmds = c.surface().commands();
        assert!(matches!(cmds[0], PathCommand::LineTo(_)));
        assert!(matches!(cmds[1], PathCommand::MoveTo(_)));
        assert_close(c.position(), Point::new(20.0, 0.0));
    }

    #[test]
    fn test_hole_radius_is_shrunk_by_burn() {
        let mut c = canvas(0.1);
        c.hole(0.0, 0.0, 2.0);
        let max_x = c.surface().bounds().unwrap().max.x;
        // cut radius 2 - burn on the inside
        assert!((max_x - 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_rectangular_hole_closes() {
        let mut c = canvas(0.0);
        c.rectangular_hole(0.0, 0.0, 8.0, 4.0, 0.0);
        let b = c.surface().bounds().unwrap();
        assert!((b.width() - 8.0).abs() < 1e-9);
        assert!((b.height() - 4.0).abs() < 1e-9);
        assert_close(c.position(), Point::ZERO);
    }

    #[test]
    fn test_move_part_only_reserves_space() {
        let mut c = canvas(0.0);
        assert!(c.move_part(50.0, 30.0, "right only", true).unwrap());
        // only layout moves, nothing drawn
        assert!(c.surface().bounds().is_none());
        // next part starts past the reserved space
        assert!(c.position().x >= 50.0);
    }

    #[test]
    fn test_move_part_unknown_direction() {
        let mut c = canvas(0.0);
        let err = c.move_part(10.0, 10.0, "sideways", true).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownDirection("sideways".to_string())
        );
    }

    #[test]
    fn test_move_arc_matches_corner_displacement() {
        let mut draw = canvas(0.0);
        draw.corner(90.0, 2.0);
        let mut mv = canvas(0.0);
        mv.move_arc(90.0, 2.0);
        assert_close(draw.position(), mv.position());
        assert!((draw.heading() - mv.heading()).abs() < 1e-12);
    }

    #[test]
    fn test_bed_bolt_hole_spans_the_edge() {
        let mut c = canvas(0.0);
        c.bed_bolt_hole(30.0, None);
        assert_close(c.position(), Point::new(30.0, 0.0));
        assert!(c.heading().abs() < 1e-12);
        let b = c.surface().bounds().unwrap();
        // slot reaches the bolt length into the part
        assert!((b.max.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_edge_code() {
        let c = canvas(0.0);
        assert_eq!(c.edge_for('q').unwrap_err(), EngineError::UnknownEdge('q'));
        assert!(c.edge_for('f').is_ok());
    }

    proptest! {
        #[test]
        fn corner_pairs_restore_heading(
            degrees in -170.0..170.0f64,
            radius in 0.0..20.0f64,
            burn in 0.0..0.3f64,
        ) {
            let mut c = canvas(burn);
            c.corner(degrees, radius);
            c.corner(-degrees, radius);
            prop_assert!(c.heading().abs() < 1e-9);
        }
    }
}
