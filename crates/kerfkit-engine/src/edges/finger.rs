//! Finger joints
//!
//! Both halves of a box joint plus the hole row for T joints. All three
//! draw from one shared [`FingerJointSettings`] bundle, so tabs,
//! notches and holes stay matched when the settings change.

use crate::bolts::BoltPolicy;
use crate::canvas::{Canvas, PolyStep};
use crate::edges::Edge;
use crate::settings::FingerJointSettings;
use kerfkit_core::{Result, Shared};
use tracing::debug;

/// Layout of a finger joint along an edge: finger count and the space
/// left over at both ends combined.
pub(crate) fn calc_fingers(
    s: &FingerJointSettings,
    length: f64,
    bolts: Option<&dyn BoltPolicy>,
) -> (usize, f64) {
    let (space, finger) = (s.space, s.finger);
    let pitch = space + finger;
    let mut fingers = if pitch > 0.0 {
        (((length - (s.surrounding_spaces - 1.0) * space) / pitch).floor() as i64).max(0) as usize
    } else {
        0
    };
    // shrink surrounding space up to half a thickness each side
    if fingers == 0 && length > finger + s.thickness() {
        fingers = 1;
    }
    if finger == 0.0 {
        fingers = 0;
    }
    if let Some(b) = bolts {
        fingers = b.num_fingers(fingers);
    }
    if fingers == 0 {
        return (0, length);
    }
    (fingers, length - fingers as f64 * pitch + space)
}

/// Finger joint edge, tabs ('f') or notches ('F')
///
/// Tabs stick `height` out of the edge into the margin; the
/// counterpart cuts matching notches into the part and claims the same
/// height as width. Notches and holes grow by `play` on both sides.
#[derive(Debug, Clone)]
pub struct FingerJointEdge {
    settings: Shared<FingerJointSettings>,
    positive: bool,
}

impl FingerJointEdge {
    /// The tab side ('f').
    pub fn tabs(settings: Shared<FingerJointSettings>) -> Self {
        Self {
            settings,
            positive: true,
        }
    }

    /// The notch side ('F').
    pub fn notches(settings: Shared<FingerJointSettings>) -> Self {
        Self {
            settings,
            positive: false,
        }
    }

    fn draw_finger(&self, canvas: &mut Canvas, f: f64, h: f64) {
        let turn = if self.positive { -90.0 } else { 90.0 };
        canvas.polyline(&[
            PolyStep::Corner(turn, 0.0),
            PolyStep::Edge(h),
            PolyStep::Corner(-turn, 0.0),
            PolyStep::Edge(f),
            PolyStep::Corner(-turn, 0.0),
            PolyStep::Edge(h),
            PolyStep::Corner(turn, 0.0),
        ]);
    }
}

impl Edge for FingerJointEdge {
    fn code(&self) -> char {
        if self.positive {
            'f'
        } else {
            'F'
        }
    }

    fn description(&self) -> &'static str {
        if self.positive {
            "Finger Joint"
        } else {
            "Finger Joint (opposing side)"
        }
    }

    fn width(&self) -> f64 {
        if self.positive {
            0.0
        } else {
            self.settings.borrow().height
        }
    }

    fn margin(&self) -> f64 {
        if self.positive {
            self.settings.borrow().height
        } else {
            0.0
        }
    }

    fn draw(
        &self,
        canvas: &mut Canvas,
        length: f64,
        bolts: Option<&dyn BoltPolicy>,
    ) -> Result<()> {
        let s = *self.settings.borrow();
        let (fingers, mut leftover) = calc_fingers(&s, length, bolts);
        if fingers == 0 {
            debug!(length, "no room for fingers, drawing straight");
            canvas.edge(length);
            return Ok(());
        }

        let (mut f, mut space) = (s.finger, s.space);
        if !self.positive {
            f += s.play;
            space -= s.play;
            leftover -= s.play;
        }
        let h = s.height;
        let d = canvas.bed_bolt().d;

        canvas.edge(leftover / 2.0);
        for i in 0..fingers {
            if i != 0 {
                let bolt_here = bolts.map_or(false, |b| b.draw_bolt(fingers, i));
                if !self.positive && bolt_here {
                    canvas.hole(0.5 * space, 0.5 * s.thickness(), 0.5 * d);
                }
                if self.positive && bolt_here {
                    canvas.bed_bolt_hole(space, None);
                } else {
                    canvas.edge(space);
                }
            }
            self.draw_finger(canvas, f, h);
        }
        canvas.edge(leftover / 2.0);
        Ok(())
    }
}

/// Row of holes matching a finger joint edge, for T joints
#[derive(Debug, Clone)]
pub struct FingerHoles {
    settings: Shared<FingerJointSettings>,
}

impl FingerHoles {
    /// Hole row drawing from the given shared settings.
    pub fn new(settings: Shared<FingerJointSettings>) -> Self {
        Self { settings }
    }

    /// Draw the hole row from `(x, y)` at `angle` degrees, matching an
    /// edge of the given length.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        x: f64,
        y: f64,
        length: f64,
        angle: f64,
        bolts: Option<&dyn BoltPolicy>,
    ) -> Result<()> {
        let s = *self.settings.borrow();
        let (fingers, leftover) = calc_fingers(&s, length, bolts);
        let d = canvas.bed_bolt().d;
        let mut c = canvas.saved();
        c.move_to(x, y, angle);
        for i in 0..fingers {
            let pos = leftover / 2.0 + i as f64 * (s.space + s.finger);
            if bolts.map_or(false, |b| b.draw_bolt(fingers, i)) {
                c.hole(pos - 0.5 * s.space, 0.0, 0.5 * d);
            }
            c.rectangular_hole(pos + 0.5 * s.finger, 0.0, s.finger + s.play, s.width + s.play, 0.0);
        }
        Ok(())
    }
}

/// Straight edge with a parallel finger hole row ('h')
///
/// Takes the place of a notch edge when the mating wall sits inside
/// the part instead of at its border. The hole row runs `edge_width`
/// plus half a thickness inside; the edge claims `edge_width` plus one
/// thickness of width.
#[derive(Debug, Clone)]
pub struct FingerHoleEdge {
    settings: Shared<FingerJointSettings>,
    holes: FingerHoles,
}

impl FingerHoleEdge {
    /// Hole edge drawing from the given shared settings.
    pub fn new(settings: Shared<FingerJointSettings>) -> Self {
        let holes = FingerHoles::new(settings.clone());
        Self { settings, holes }
    }
}

impl Edge for FingerHoleEdge {
    fn code(&self) -> char {
        'h'
    }

    fn description(&self) -> &'static str {
        "Edge (parallel Finger Joint Holes)"
    }

    fn width(&self) -> f64 {
        let s = self.settings.borrow();
        s.edge_width + s.thickness()
    }

    fn draw(
        &self,
        canvas: &mut Canvas,
        length: f64,
        bolts: Option<&dyn BoltPolicy>,
    ) -> Result<()> {
        let (edge_width, t) = {
            let s = self.settings.borrow();
            (s.edge_width, s.thickness())
        };
        let y = canvas.burn() + edge_width + t / 2.0;
        self.holes.draw(canvas, 0.0, y, length, 0.0, bolts)?;
        canvas.edge(length);
        Ok(())
    }
}
