//! Core-Domänentypen: Elemente, Segmente, Netzwerk, Geometrie, Propagation.

pub mod element;
pub mod geometry;
pub mod network;
pub mod propagation;
pub mod segment;

pub use element::{Element, ElementKind};
pub use geometry::SNAP_TOLERANCE;
pub use network::PipeNetwork;
pub use propagation::{propagate, PropagationResult};
pub use segment::Segment;
