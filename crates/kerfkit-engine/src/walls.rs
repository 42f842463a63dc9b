//! Wall composition
//!
//! Whole part outlines built from edge codes: rectangular walls, plates
//! with rounded corners, the matching surrounding wall band and regular
//! polygon walls. All of them speak the move sublanguage (`up`, `down`,
//! `left`, `right`, `only`) to lay parts out next to each other, and
//! call back into user code once per side for holes and decorations.

use crate::bolts::BoltPolicy;
use crate::canvas::Canvas;
use crate::edges::Edge;
use kerfkit_core::{EngineError, Result};
use std::f64::consts::PI;
use std::rc::Rc;

/// Per-side decoration hook, called with the drawing frame at the
/// side's inner start corner and the side number.
pub type WallCallback<'a> = dyn FnMut(&mut Canvas, usize) -> Result<()> + 'a;

/// Optional arguments shared by all wall drawing calls
#[derive(Default)]
pub struct WallOpts<'a> {
    /// Hook run once per side before the side is drawn.
    pub callback: Option<&'a mut WallCallback<'a>>,
    /// Bed bolt policy per side, missing entries mean no bolts.
    pub bed_bolts: &'a [Option<&'a dyn BoltPolicy>],
    /// Move sublanguage directive, for example "right" or "up left only".
    pub move_dir: &'a str,
}

fn bolts_entry<'a>(
    bed_bolts: &'a [Option<&'a dyn BoltPolicy>],
    i: usize,
) -> Option<&'a dyn BoltPolicy> {
    bed_bolts.get(i).copied().flatten()
}

/// Side lengths of a regular polygon, by one of three measures
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolygonSize {
    /// Distance from the center to a corner.
    Radius(f64),
    /// Distance from the center to the middle of a side.
    Apothem(f64),
    /// Length of one side.
    Side(f64),
}

/// Radius, apothem and side length of a regular polygon with the given
/// number of corners.
pub fn regular_polygon(corners: usize, size: PolygonSize) -> (f64, f64, f64) {
    let half_angle = (180.0 / corners as f64).to_radians();
    match size {
        PolygonSize::Radius(r) => (r, r * half_angle.cos(), 2.0 * half_angle.sin() * r),
        PolygonSize::Apothem(h) => {
            let side = 2.0 * half_angle.tan() * h;
            (((side / 2.0).powi(2) + h * h).sqrt(), h, side)
        }
        PolygonSize::Side(side) => {
            let h = 0.5 * side * (std::f64::consts::FRAC_PI_2 - half_angle).tan();
            (((side / 2.0).powi(2) + h * h).sqrt(), h, side)
        }
    }
}

impl Canvas {
    fn cc(
        &mut self,
        callback: &mut Option<&mut WallCallback<'_>>,
        number: usize,
        x: f64,
        y: f64,
    ) -> Result<()> {
        if let Some(cb) = callback.as_mut() {
            let mut c = self.saved();
            c.move_to(x, y, 0.0);
            (**cb)(&mut c, number)?;
        }
        Ok(())
    }

    /// Rectangular wall with one edge code per side (bottom, right,
    /// top, left).
    ///
    /// The callback is invoked once per side, numbered 0..4, with the
    /// frame at the side's inner start corner. Bed bolt policies apply
    /// per side in the same order.
    pub fn rectangular_wall(
        &mut self,
        x: f64,
        y: f64,
        edges: &str,
        opts: WallOpts<'_>,
    ) -> Result<()> {
        let codes: Vec<char> = edges.chars().collect();
        if codes.len() != 4 {
            return Err(EngineError::EdgeCount {
                expected: 4,
                got: codes.len(),
            });
        }
        let mut resolved = Vec::with_capacity(4);
        for code in codes {
            resolved.push(self.edge_for(code)?);
        }
        self.rectangular_wall_edges(x, y, &resolved, opts)
    }

    /// Rectangular wall from edge values instead of registry codes,
    /// for one-off edges.
    pub fn rectangular_wall_edges(
        &mut self,
        x: f64,
        y: f64,
        edges: &[Rc<dyn Edge>],
        mut opts: WallOpts<'_>,
    ) -> Result<()> {
        if edges.len() != 4 {
            return Err(EngineError::EdgeCount {
                expected: 4,
                got: edges.len(),
            });
        }
        let e = |i: usize| &edges[i % 4];
        let overallwidth = x + e(3).spacing() + e(1).spacing();
        let overallheight = y + e(0).spacing() + e(2).spacing();

        if self.move_part(overallwidth, overallheight, opts.move_dir, true)? {
            return Ok(());
        }

        self.move_to(e(3).spacing(), 0.0, 0.0);
        self.move_to(0.0, e(0).margin(), 0.0);
        let mut cb = opts.callback.take();
        let burn = self.burn();
        for (i, l) in [(0usize, x), (1, y), (2, x), (3, y)] {
            self.cc(&mut cb, i, 0.0, e(i).width() + burn)?;
            e(i).draw(self, l, bolts_entry(opts.bed_bolts, i))?;
            self.edge_corner(&**e(i), &**e(i + 1), 90.0);
        }

        self.move_part(overallwidth, overallheight, opts.move_dir, false)?;
        Ok(())
    }

    /// Plate with rounded corners, fitting [`Canvas::surrounding_wall`].
    ///
    /// The first side is split in two halves so a joint falls into its
    /// middle; callbacks are numbered 0 and 1 for the two halves, 2..5
    /// for the other sides.
    pub fn rounded_plate(
        &mut self,
        x: f64,
        y: f64,
        r: f64,
        edge: char,
        mut opts: WallOpts<'_>,
    ) -> Result<()> {
        let lx = x - 2.0 * r;
        let ly = y - 2.0 * r;
        if lx < 0.0 || ly < 0.0 {
            return Err(EngineError::Geometry(format!(
                "corner radius {} does not fit a {} x {} plate",
                r, x, y
            )));
        }
        let e = self.edge_for(edge)?;
        let overallwidth = x + 2.0 * e.spacing();
        let overallheight = y + 2.0 * e.spacing();

        if self.move_part(overallwidth, overallheight, opts.move_dir, true)? {
            return Ok(());
        }

        let r = r + e.width();
        self.move_to(e.margin(), e.margin(), 0.0);
        self.move_to(r, 0.0, 0.0);

        let mut cb = opts.callback.take();
        let burn = self.burn();
        self.cc(&mut cb, 0, 0.0, burn)?;
        e.draw(self, lx / 2.0, bolts_entry(opts.bed_bolts, 0))?;
        self.cc(&mut cb, 1, 0.0, burn)?;
        e.draw(self, lx / 2.0, bolts_entry(opts.bed_bolts, 1))?;
        for (i, l) in [(0usize, ly), (1, lx), (2, ly)] {
            self.corner(90.0, r);
            self.cc(&mut cb, i + 2, 0.0, burn)?;
            e.draw(self, l, bolts_entry(opts.bed_bolts, i + 2))?;
        }
        self.corner(90.0, r);

        self.move_part(overallwidth, overallheight, opts.move_dir, false)?;
        Ok(())
    }

    /// Flat development of the wall band around a rounded plate.
    ///
    /// `x`, `y` and `r` are the measures of the matching plate, `h` the
    /// height of the band. The rounded plate corners become living
    /// hinge fields, shortened by the flex `stretch` factor since the
    /// material lengthens when bent. `bottom`
    /// and `top` take edge codes; the short ends carry the dovetail
    /// pair so the band closes around the plate. Callbacks run at the
    /// flat stretches: 0 and 4 for the halves of the first side, 1 and
    /// 3 for the y sides, 2 for the far side.
    pub fn surrounding_wall(
        &mut self,
        x: f64,
        y: f64,
        r: f64,
        h: f64,
        bottom: char,
        top: char,
        mut opts: WallOpts<'_>,
    ) -> Result<()> {
        if x - 2.0 * r < 0.0 || y - 2.0 * r < -1e-3 {
            return Err(EngineError::Geometry(format!(
                "corner radius {} does not fit a {} x {} plate",
                r, x, y
            )));
        }
        let stretch = self.flex_settings().borrow().stretch;
        let c4 = (r + self.burn()) * PI * 0.5 / stretch;

        let top = self.edge_for(top)?;
        let bottom = self.edge_for(bottom)?;
        let left = self.edge_for('D')?;
        let right = self.edge_for('d')?;

        let topwidth = top.width();
        let bottomwidth = bottom.width();

        let overallwidth =
            2.0 * x + 2.0 * y - 8.0 * r + 4.0 * c4 + right.spacing() + left.spacing();
        let overallheight = h + top.spacing() + bottom.spacing();

        if self.move_part(overallwidth, overallheight, opts.move_dir, true)? {
            return Ok(());
        }

        self.move_to(left.spacing(), bottom.margin(), 0.0);

        let mut cb = opts.callback.take();
        let burn = self.burn();
        self.cc(&mut cb, 0, 0.0, bottomwidth + burn)?;
        bottom.draw(self, x / 2.0 - r, None)?;
        if y - 2.0 * r < 1e-3 {
            // plate degenerates to a stadium shape, both bends merge
            self.flex(2.0 * c4, h + topwidth + bottomwidth);
            self.cc(&mut cb, 2, 0.0, bottomwidth + burn)?;
            bottom.draw(self, x - 2.0 * r, None)?;
            self.flex(2.0 * c4, h + topwidth + bottomwidth);
            self.cc(&mut cb, 4, 0.0, bottomwidth + burn)?;
        } else {
            for (i, l) in [(0usize, y), (1, x), (2, y), (3, 0.0)] {
                self.flex(c4, h + topwidth + bottomwidth);
                self.cc(&mut cb, i + 1, 0.0, bottomwidth + burn)?;
                if i < 3 {
                    bottom.draw(self, l - 2.0 * r, None)?;
                }
            }
        }
        bottom.draw(self, x / 2.0 - r, None)?;

        self.edge_corner(&*bottom, &*right, 90.0);
        right.draw(self, h, None)?;
        self.edge_corner(&*right, &*top, 90.0);

        top.draw(self, x / 2.0 - r, None)?;
        for (i, l) in [(0usize, y), (1, x), (2, y), (3, 0.0)] {
            self.edge(c4);
            if i < 3 {
                top.draw(self, l - 2.0 * r, None)?;
            }
        }
        top.draw(self, x / 2.0 - r, None)?;

        self.edge_corner(&*top, &*left, 90.0);
        left.draw(self, h, None)?;
        self.edge_corner(&*left, &*bottom, 90.0);

        self.move_part(overallwidth, overallheight, opts.move_dir, false)?;
        Ok(())
    }

    /// Regular polygon wall.
    ///
    /// `edges` is one code for all sides or one per side. `hole` cuts a
    /// round hole of the given diameter into the center. Callback 0
    /// runs at the center, 1.. at the sides.
    pub fn regular_polygon_wall(
        &mut self,
        corners: usize,
        size: PolygonSize,
        edges: &str,
        hole: Option<f64>,
        mut opts: WallOpts<'_>,
    ) -> Result<()> {
        if corners < 3 {
            return Err(EngineError::Geometry(format!(
                "a polygon needs at least 3 corners, got {}",
                corners
            )));
        }
        let codes: Vec<char> = edges.chars().collect();
        let codes = if codes.len() == 1 {
            vec![codes[0]; corners]
        } else if codes.len() == corners {
            codes
        } else {
            return Err(EngineError::EdgeCount {
                expected: corners,
                got: codes.len(),
            });
        };
        let mut resolved = Vec::with_capacity(corners);
        for code in codes {
            resolved.push(self.edge_for(code)?);
        }
        let e = |i: usize| &resolved[i % corners];

        let (r, h, side) = regular_polygon(corners, size);
        let t = self.thickness();
        let th = if corners % 2 == 1 {
            r + h + 2.0 * t
        } else {
            2.0 * h + 2.0 * t
        };
        let tw = 2.0 * r + 3.0 * t;

        if self.move_part(tw, th, opts.move_dir, true)? {
            return Ok(());
        }

        self.move_to(r - 0.5 * side, 0.0, 0.0);

        let burn = self.burn();
        if let Some(d) = hole {
            self.hole(side / 2.0, h + e(0).width() + burn, d / 2.0);
        }
        let mut cb = opts.callback.take();
        self.cc(&mut cb, 0, side / 2.0, h + e(0).width() + burn)?;
        for i in 0..corners {
            self.cc(&mut cb, i + 1, 0.0, e(i).width() + burn)?;
            e(i).draw(self, side, bolts_entry(opts.bed_bolts, i))?;
            self.edge_corner(&**e(i), &**e(i + 1), 360.0 / corners as f64);
        }

        self.move_part(tw, th, opts.move_dir, false)?;
        Ok(())
    }
}
