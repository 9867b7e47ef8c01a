//! Shared raster surface and replication engine for the drawing game.
//!
//! One participant per turn draws; every other participant replays the same
//! ordered stream of operations. This crate owns the pixels and guarantees
//! that the local path (the drawer's own input) and the remote path (frames
//! received from the server) produce identical surfaces for identical input.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::CanvasEngine`]: the only owner of the surface and undo history |
//! | [`input`] | Pointer-input adapter: permission-gated gestures that emit [`engine::Op`]s |
//! | [`surface`] | Fixed-size RGBA pixel grid (read-only outside the crate) |
//! | [`raster`] | Stroke and flood-fill rasterisation |
//! | [`history`] | Bounded stack of full-surface snapshots |
//! | [`color`] | RGBA colour and hex parsing |
//! | [`geom`] | Points and segment distance |
//! | [`consts`] | Surface size, brush limits, history capacity |

pub mod color;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod history;
pub mod input;
pub mod raster;
pub mod surface;
