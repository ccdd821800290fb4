//! Handler für den Propagationslauf.

use crate::app::use_cases;
use crate::app::AppState;
use crate::surface::CanvasSurface;

/// Führt einen Propagationslauf aus und projiziert den Status.
pub fn run_propagation(state: &mut AppState, surface: &mut dyn CanvasSurface, tolerance: f32) {
    use_cases::flow::update_flow(state, surface, tolerance);
}
