//! Dovetail joints
//!
//! Trapezoid tails with a pitch of twice the tail size. The two sides
//! share one settings bundle; the counterpart draws the same profile
//! with inverted sign so the parts interlock.

use crate::bolts::BoltPolicy;
use crate::canvas::Canvas;
use crate::edges::Edge;
use crate::settings::DovetailSettings;
use kerfkit_core::{Result, Shared};
use tracing::debug;

/// Dovetail edge, tails ('d') or recesses ('D')
#[derive(Debug, Clone)]
pub struct DovetailEdge {
    settings: Shared<DovetailSettings>,
    positive: bool,
}

impl DovetailEdge {
    /// The tail side ('d').
    pub fn tails(settings: Shared<DovetailSettings>) -> Self {
        Self {
            settings,
            positive: true,
        }
    }

    /// The recess side ('D').
    pub fn recesses(settings: Shared<DovetailSettings>) -> Self {
        Self {
            settings,
            positive: false,
        }
    }
}

impl Edge for DovetailEdge {
    fn code(&self) -> char {
        if self.positive {
            'd'
        } else {
            'D'
        }
    }

    fn description(&self) -> &'static str {
        if self.positive {
            "Dove Tail Joint"
        } else {
            "Dove Tail Joint (opposing side)"
        }
    }

    fn margin(&self) -> f64 {
        if self.positive {
            self.settings.borrow().depth
        } else {
            0.0
        }
    }

    fn draw(
        &self,
        canvas: &mut Canvas,
        length: f64,
        _bolts: Option<&dyn BoltPolicy>,
    ) -> Result<()> {
        let s = *self.settings.borrow();
        // rounding below the kerf would be cut away entirely
        let radius = s.radius.max(canvas.burn());
        let a = s.angle + 90.0;
        let alpha = (90.0 - s.angle).to_radians();

        let l1 = radius / (alpha / 2.0).tan();
        let diffx = 0.5 * s.depth / alpha.tan();
        let l2 = 0.5 * s.depth / alpha.sin();

        let sections = (length / (s.size * 2.0)).floor() as usize;
        let leftover = length - sections as f64 * s.size * 2.0;

        if sections == 0 {
            debug!(length, "edge too short for dovetails, drawing straight");
            canvas.edge(length);
            return Ok(());
        }

        let p = if self.positive { 1.0 } else { -1.0 };

        canvas.edge((s.size + leftover) / 2.0 + diffx - l1);
        for i in 0..sections {
            canvas.corner(-p * a, radius);
            canvas.edge(2.0 * (l2 - l1));
            canvas.corner(p * a, radius);
            canvas.edge(2.0 * (diffx - l1) + s.size);
            canvas.corner(p * a, radius);
            canvas.edge(2.0 * (l2 - l1));
            canvas.corner(-p * a, radius);

            if i < sections - 1 {
                canvas.edge(2.0 * (diffx - l1) + s.size);
            }
        }
        canvas.edge((s.size + leftover) / 2.0 + diffx - l1);
        Ok(())
    }
}
