//! Gasline Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod surface;

pub use app::{AppCommand, AppController, AppIntent, AppState, DraggedItem};
pub use core::{
    propagate, Element, ElementKind, PipeNetwork, PropagationResult, Segment, SNAP_TOLERANCE,
};
pub use shared::EditorOptions;
pub use surface::{CanvasSurface, GeometryOracle, MemoryCanvas, ShapeRef, VisualState};
