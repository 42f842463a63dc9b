//! # Kerfkit Engine
//!
//! Turtle graphics engine for laser-cut part outlines with kerf
//! compensation baked into every corner.
//!
//! ## Drawing model
//!
//! - **Canvas**: a cursor with position and heading, drawing onto a
//!   [`Surface`](kerfkit_core::Surface) in world coordinates
//! - **Edges**: pluggable generators drawn along the local x axis,
//!   looked up by one-character codes (plain, outset, finger joints,
//!   finger holes, dovetails)
//! - **Walls**: whole part outlines composed from edge codes, laid out
//!   on the sheet with the move sublanguage
//!
//! ## Joints and fittings
//!
//! - **Finger joints**: tabs, notches and the matching hole rows for
//!   T joints, all sharing one settings bundle
//! - **Dovetails**: tails and recesses for wrap-around walls
//! - **Living hinges**: flex cut fields for bending flat stock
//! - **Bed bolts**: T-slot cutouts with captive nuts, distributed over
//!   finger joints by a [`BoltPolicy`](bolts::BoltPolicy)

pub mod bolts;
pub mod canvas;
pub mod edges;
pub mod parts;
pub mod settings;
pub mod walls;

// Re-export commonly used items
pub use bolts::{BoltPolicy, Bolts};
pub use canvas::{Canvas, CanvasConfig, PolyStep, SavedContext};
pub use edges::{Edge, OutsetEdge, PlainEdge};
pub use parts::{NutHole, NutSize};
pub use settings::{BedBoltSettings, DovetailSettings, FingerJointSettings, FlexSettings};
pub use walls::{regular_polygon, PolygonSize, WallCallback, WallOpts};
