//! Part building blocks that are not edges
//!
//! Hole shapes dropped into walls: hexagon cutouts holding metric nuts.

use crate::canvas::Canvas;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Metric nut sizes (ISO 4032)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NutSize {
    /// M1.6 nut.
    M1_6,
    /// M2 nut.
    M2,
    /// M2.5 nut.
    M2_5,
    /// M3 nut.
    M3,
    /// M4 nut.
    M4,
    /// M5 nut.
    M5,
    /// M6 nut.
    M6,
    /// M8 nut.
    M8,
    /// M10 nut.
    M10,
    /// M12 nut.
    M12,
    /// M16 nut.
    M16,
    /// M20 nut.
    M20,
    /// M24 nut.
    M24,
    /// M30 nut.
    M30,
    /// M36 nut.
    M36,
    /// M42 nut.
    M42,
    /// M48 nut.
    M48,
    /// M56 nut.
    M56,
    /// M64 nut.
    M64,
    /// Any other nut, by width across flats in mm.
    WidthAcrossFlats(f64),
}

impl NutSize {
    /// Width across flats in mm.
    pub fn across_flats(self) -> f64 {
        match self {
            NutSize::M1_6 => 3.2,
            NutSize::M2 => 4.0,
            NutSize::M2_5 => 5.0,
            NutSize::M3 => 5.5,
            NutSize::M4 => 7.0,
            NutSize::M5 => 8.0,
            NutSize::M6 => 10.0,
            NutSize::M8 => 13.0,
            NutSize::M10 => 16.0,
            NutSize::M12 => 18.0,
            NutSize::M16 => 24.0,
            NutSize::M20 => 30.0,
            NutSize::M24 => 36.0,
            NutSize::M30 => 46.0,
            NutSize::M36 => 55.0,
            NutSize::M42 => 65.0,
            NutSize::M48 => 75.0,
            NutSize::M56 => 85.0,
            NutSize::M64 => 95.0,
            NutSize::WidthAcrossFlats(w) => w,
        }
    }

    /// Nut height in mm.
    pub fn height(self) -> f64 {
        match self {
            NutSize::M1_6 => 1.3,
            NutSize::M2 => 1.6,
            NutSize::M2_5 => 2.0,
            NutSize::M3 => 2.4,
            NutSize::M4 => 3.2,
            NutSize::M5 => 4.7,
            NutSize::M6 => 5.2,
            NutSize::M8 => 6.8,
            NutSize::M10 => 8.4,
            NutSize::M12 => 10.8,
            NutSize::M16 => 14.8,
            NutSize::M20 => 18.0,
            NutSize::M24 => 21.5,
            NutSize::M30 => 25.6,
            NutSize::M36 => 31.0,
            NutSize::M42 => 34.0,
            NutSize::M48 => 38.0,
            NutSize::M56 => 45.0,
            NutSize::M64 => 51.0,
            // no standard table entry, estimate from the thread pitch
            NutSize::WidthAcrossFlats(w) => 0.55 * w,
        }
    }
}

impl FromStr for NutSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M1.6" => Ok(NutSize::M1_6),
            "M2" => Ok(NutSize::M2),
            "M2.5" => Ok(NutSize::M2_5),
            "M3" => Ok(NutSize::M3),
            "M4" => Ok(NutSize::M4),
            "M5" => Ok(NutSize::M5),
            "M6" => Ok(NutSize::M6),
            "M8" => Ok(NutSize::M8),
            "M10" => Ok(NutSize::M10),
            "M12" => Ok(NutSize::M12),
            "M16" => Ok(NutSize::M16),
            "M20" => Ok(NutSize::M20),
            "M24" => Ok(NutSize::M24),
            "M30" => Ok(NutSize::M30),
            "M36" => Ok(NutSize::M36),
            "M42" => Ok(NutSize::M42),
            "M48" => Ok(NutSize::M48),
            "M56" => Ok(NutSize::M56),
            "M64" => Ok(NutSize::M64),
            _ => Err(format!("Unknown nut size: {}", s)),
        }
    }
}

/// Hexagon hole fitting a metric nut
pub struct NutHole;

impl NutHole {
    /// Draw the hexagon around the local point `(x, y)`, rotated by
    /// `angle` degrees. The hexagon is sized by the nut's width across
    /// flats; the flat-to-flat axis runs along the rotated y axis.
    pub fn draw(canvas: &mut Canvas, size: NutSize, x: f64, y: f64, angle: f64) {
        let across = size.across_flats();
        let side = across / 3.0_f64.sqrt();
        let mut c = canvas.saved();
        c.move_to(x, y, angle);
        c.move_to(-0.5 * side, 0.5 * across, 0.0);
        for _ in 0..6 {
            c.edge(side);
            c.corner(-60.0, 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, CanvasConfig};
    use kerfkit_core::Point;

    fn canvas() -> Canvas {
        Canvas::new(CanvasConfig {
            burn: 0.0,
            ..CanvasConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_named_sizes_parse() {
        assert_eq!("M3".parse::<NutSize>().unwrap(), NutSize::M3);
        assert_eq!("M2.5".parse::<NutSize>().unwrap(), NutSize::M2_5);
        assert!("M7".parse::<NutSize>().is_err());
    }

    #[test]
    fn test_m3_dimensions() {
        assert_eq!(NutSize::M3.across_flats(), 5.5);
        assert_eq!(NutSize::M3.height(), 2.4);
    }

    #[test]
    fn test_hexagon_spans_across_flats() {
        let mut c = canvas();
        NutHole::draw(&mut c, NutSize::M6, 0.0, 0.0, 0.0);
        let b = c.surface().bounds().unwrap();
        // flat to flat along y, corner to corner along x
        assert!((b.height() - 10.0).abs() < 1e-9);
        assert!((b.width() - 2.0 * 10.0 / 3.0_f64.sqrt()).abs() < 1e-9);
        // centered on the requested point
        assert!((b.min.y + 5.0).abs() < 1e-9);
        assert!((b.max.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_hexagon_closes_and_restores() {
        let mut c = canvas();
        c.edge(4.0);
        NutHole::draw(&mut c, NutSize::WidthAcrossFlats(9.0), 10.0, 5.0, 30.0);
        assert!((c.position() - Point::new(4.0, 0.0)).length() < 1e-9);
        assert!(c.heading().abs() < 1e-12);
    }
}
