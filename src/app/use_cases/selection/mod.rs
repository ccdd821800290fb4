//! Use-Cases rund um Greifen und Verschieben.

pub mod drag;
pub mod pick;

pub use drag::drag_to;
pub use pick::{begin_drag, element_at, end_drag, segment_at};
