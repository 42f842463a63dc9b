//! Core layer of kerfkit
//!
//! Dependency-light leaves shared by the drawing engine: 2D vector math,
//! the recording path surface with SVG serialization, shared ownership
//! aliases and the error taxonomy.

pub mod error;
pub mod geom;
pub mod surface;
pub mod types;

pub use error::{EngineError, ParameterError, ParameterResult, Result};
pub use geom::{circle_point, kerf_offset, tangent, Point};
pub use surface::{Bounds, PathCommand, Surface};
pub use types::{shared, Shared};
