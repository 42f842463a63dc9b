//! Edge settings bundles
//!
//! Every joint family carries a bundle of named parameters. Each bundle
//! declares an absolute set (taken as-is) and a relative set (multiplied
//! by material thickness unless the caller opts out). Values are stored
//! resolved, in mm.
//!
//! Overrides are applied transactionally: every name is validated before
//! anything is written, so a failed `set_values` leaves the bundle
//! exactly as it was.

use kerfkit_core::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};

fn check_names(
    settings: &'static str,
    absolute: &[&str],
    relative: &[&str],
    values: &[(&str, f64)],
) -> ParameterResult<()> {
    for &(name, _) in values {
        if !absolute.contains(&name) && !relative.contains(&name) {
            return Err(ParameterError::Unknown {
                settings,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn invalid(name: &str, reason: &str) -> ParameterError {
    ParameterError::InvalidValue {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Settings for finger joints and their hole counterparts
///
/// Shared between the tab side, the notch side and the hole edge so one
/// override retunes all of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerJointSettings {
    thickness: f64,
    /// Space at the start and end of the edge, in multiples of the
    /// inter-finger space.
    pub surrounding_spaces: f64,
    /// Space between fingers (mm).
    pub space: f64,
    /// Finger length along the edge (mm).
    pub finger: f64,
    /// How far fingers stick out of (or notches cut into) the edge (mm).
    pub height: f64,
    /// Height of the mating finger holes (mm).
    pub width: f64,
    /// Distance between the wall edge and the finger hole row (mm).
    pub edge_width: f64,
    /// Extra clearance added to holes and notches (mm).
    pub play: f64,
}

impl FingerJointSettings {
    /// Parameters taken as-is.
    pub const ABSOLUTE: &'static [&'static str] = &["surroundingspaces"];
    /// Parameters multiplied by thickness.
    pub const RELATIVE: &'static [&'static str] =
        &["space", "finger", "height", "width", "edge_width", "play"];

    /// Defaults for the given material thickness.
    pub fn new(thickness: f64) -> Self {
        Self {
            thickness,
            surrounding_spaces: 2.0,
            space: thickness,
            finger: thickness,
            height: thickness,
            width: thickness,
            edge_width: thickness,
            play: 0.0,
        }
    }

    /// Defaults plus overrides.
    pub fn with_values(
        thickness: f64,
        relative: bool,
        values: &[(&str, f64)],
    ) -> ParameterResult<Self> {
        let mut s = Self::new(thickness);
        s.set_values(relative, values)?;
        Ok(s)
    }

    /// Material thickness the relative values were resolved against.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Apply named overrides. With `relative` set, values of the
    /// relative parameters are multiplied by thickness first.
    pub fn set_values(&mut self, relative: bool, values: &[(&str, f64)]) -> ParameterResult<()> {
        check_names("FingerJointSettings", Self::ABSOLUTE, Self::RELATIVE, values)?;
        let factor = if relative { self.thickness } else { 1.0 };
        let mut next = *self;
        for &(name, value) in values {
            match name {
                "surroundingspaces" => next.surrounding_spaces = value,
                "space" => next.space = value * factor,
                "finger" => next.finger = value * factor,
                "height" => next.height = value * factor,
                "width" => next.width = value * factor,
                "edge_width" => next.edge_width = value * factor,
                "play" => next.play = value * factor,
                _ => {
                    return Err(ParameterError::Unknown {
                        settings: "FingerJointSettings",
                        name: name.to_string(),
                    })
                }
            }
        }
        next.check()?;
        *self = next;
        Ok(())
    }

    fn check(&self) -> ParameterResult<()> {
        if self.space < 0.0 {
            return Err(invalid("space", "must not be negative"));
        }
        if self.finger < 0.0 {
            return Err(invalid("finger", "must not be negative"));
        }
        if self.space + self.finger <= 0.0 {
            return Err(invalid("finger", "space plus finger must be positive"));
        }
        if self.height <= 0.0 {
            return Err(invalid("height", "must be positive"));
        }
        if self.width <= 0.0 {
            return Err(invalid("width", "must be positive"));
        }
        if self.edge_width < 0.0 {
            return Err(invalid("edge_width", "must not be negative"));
        }
        if self.surrounding_spaces < 0.0 {
            return Err(invalid("surroundingspaces", "must not be negative"));
        }
        Ok(())
    }
}

/// Settings for dovetail joints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DovetailSettings {
    thickness: f64,
    /// Flare angle of the tail flanks in degrees.
    pub angle: f64,
    /// Half the section pitch: width of one tail (mm).
    pub size: f64,
    /// How far tails stand proud of the base line (mm).
    pub depth: f64,
    /// Corner rounding radius (mm); drawn radius never drops below the
    /// kerf.
    pub radius: f64,
}

impl DovetailSettings {
    /// Parameters taken as-is.
    pub const ABSOLUTE: &'static [&'static str] = &["angle"];
    /// Parameters multiplied by thickness.
    pub const RELATIVE: &'static [&'static str] = &["size", "depth", "radius"];

    /// Defaults for the given material thickness.
    pub fn new(thickness: f64) -> Self {
        Self {
            thickness,
            angle: 50.0,
            size: 3.0 * thickness,
            depth: 1.5 * thickness,
            radius: 0.2 * thickness,
        }
    }

    /// Defaults plus overrides.
    pub fn with_values(
        thickness: f64,
        relative: bool,
        values: &[(&str, f64)],
    ) -> ParameterResult<Self> {
        let mut s = Self::new(thickness);
        s.set_values(relative, values)?;
        Ok(s)
    }

    /// Material thickness the relative values were resolved against.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Apply named overrides.
    pub fn set_values(&mut self, relative: bool, values: &[(&str, f64)]) -> ParameterResult<()> {
        check_names("DovetailSettings", Self::ABSOLUTE, Self::RELATIVE, values)?;
        let factor = if relative { self.thickness } else { 1.0 };
        let mut next = *self;
        for &(name, value) in values {
            match name {
                "angle" => next.angle = value,
                "size" => next.size = value * factor,
                "depth" => next.depth = value * factor,
                "radius" => next.radius = value * factor,
                _ => {
                    return Err(ParameterError::Unknown {
                        settings: "DovetailSettings",
                        name: name.to_string(),
                    })
                }
            }
        }
        next.check()?;
        *self = next;
        Ok(())
    }

    fn check(&self) -> ParameterResult<()> {
        if self.angle <= 0.0 || self.angle >= 90.0 {
            return Err(invalid("angle", "must be between 0 and 90 degrees"));
        }
        if self.size <= 0.0 {
            return Err(invalid("size", "must be positive"));
        }
        if self.depth < 0.0 {
            return Err(invalid("depth", "must not be negative"));
        }
        if self.radius < 0.0 {
            return Err(invalid("radius", "must not be negative"));
        }
        Ok(())
    }
}

/// Settings for living-hinge slit fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexSettings {
    thickness: f64,
    /// How much the slitted material lengthens when bent; flexed runs
    /// are divided by this.
    pub stretch: f64,
    /// Horizontal spacing of the slit columns (mm).
    pub distance: f64,
    /// Length of the material bridges between slits (mm).
    pub connection: f64,
    /// Maximum height of one slit section (mm).
    pub width: f64,
}

impl FlexSettings {
    /// Parameters taken as-is.
    pub const ABSOLUTE: &'static [&'static str] = &["stretch"];
    /// Parameters multiplied by thickness.
    pub const RELATIVE: &'static [&'static str] = &["distance", "connection", "width"];

    /// Defaults for the given material thickness.
    pub fn new(thickness: f64) -> Self {
        Self {
            thickness,
            stretch: 1.1,
            distance: 0.5 * thickness,
            connection: thickness,
            width: 5.0 * thickness,
        }
    }

    /// Defaults plus overrides.
    pub fn with_values(
        thickness: f64,
        relative: bool,
        values: &[(&str, f64)],
    ) -> ParameterResult<Self> {
        let mut s = Self::new(thickness);
        s.set_values(relative, values)?;
        Ok(s)
    }

    /// Material thickness the relative values were resolved against.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Apply named overrides.
    pub fn set_values(&mut self, relative: bool, values: &[(&str, f64)]) -> ParameterResult<()> {
        check_names("FlexSettings", Self::ABSOLUTE, Self::RELATIVE, values)?;
        let factor = if relative { self.thickness } else { 1.0 };
        let mut next = *self;
        for &(name, value) in values {
            match name {
                "stretch" => next.stretch = value,
                "distance" => next.distance = value * factor,
                "connection" => next.connection = value * factor,
                "width" => next.width = value * factor,
                _ => {
                    return Err(ParameterError::Unknown {
                        settings: "FlexSettings",
                        name: name.to_string(),
                    })
                }
            }
        }
        next.check()?;
        *self = next;
        Ok(())
    }

    fn check(&self) -> ParameterResult<()> {
        if self.distance <= 0.01 {
            return Err(invalid("distance", "must be larger than 0.01 mm"));
        }
        if self.width <= 0.1 {
            return Err(invalid("width", "must be larger than 0.1 mm"));
        }
        if self.connection <= 0.0 {
            return Err(invalid("connection", "must be positive"));
        }
        if self.stretch <= 0.0 {
            return Err(invalid("stretch", "must be positive"));
        }
        Ok(())
    }
}

/// Dimensions of bed bolt slots and their captive nuts
///
/// All values are absolute mm; the defaults fit an M3 machine screw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BedBoltSettings {
    /// Bolt shaft diameter.
    pub d: f64,
    /// Nut width across flats.
    pub d_nut: f64,
    /// Nut height.
    pub h_nut: f64,
    /// Slot length (bolt length into the mating wall).
    pub l: f64,
    /// Slot length up to the nut pocket.
    pub l1: f64,
}

impl Default for BedBoltSettings {
    fn default() -> Self {
        Self {
            d: 3.0,
            d_nut: 5.5,
            h_nut: 2.0,
            l: 20.0,
            l1: 15.0,
        }
    }
}

impl BedBoltSettings {
    /// Parameters taken as-is (there are no relative ones).
    pub const ABSOLUTE: &'static [&'static str] = &["d", "d_nut", "h_nut", "l", "l1"];

    /// Apply named overrides.
    pub fn set_values(&mut self, values: &[(&str, f64)]) -> ParameterResult<()> {
        check_names("BedBoltSettings", Self::ABSOLUTE, &[], values)?;
        let mut next = *self;
        for &(name, value) in values {
            match name {
                "d" => next.d = value,
                "d_nut" => next.d_nut = value,
                "h_nut" => next.h_nut = value,
                "l" => next.l = value,
                "l1" => next.l1 = value,
                _ => {
                    return Err(ParameterError::Unknown {
                        settings: "BedBoltSettings",
                        name: name.to_string(),
                    })
                }
            }
        }
        next.check()?;
        *self = next;
        Ok(())
    }

    fn check(&self) -> ParameterResult<()> {
        if self.d <= 0.0 {
            return Err(invalid("d", "must be positive"));
        }
        if self.d_nut < self.d {
            return Err(invalid("d_nut", "must not be smaller than the shaft"));
        }
        if self.l1 + self.h_nut > self.l {
            return Err(invalid("l1", "nut pocket must fit inside the slot"));
        }
        Ok(())
    }
}
