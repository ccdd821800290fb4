//! Handler für Maus-Interaktion (Greifen, Ziehen, Loslassen).

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::surface::CanvasSurface;

/// Greift das Objekt unter der Position.
pub fn begin_drag(
    state: &mut AppState,
    surface: &mut dyn CanvasSurface,
    position: Vec2,
    hit_distance: f32,
) {
    use_cases::selection::begin_drag(state, surface, position, hit_distance);
}

/// Bewegt das gegriffene Objekt.
pub fn drag_to(state: &mut AppState, surface: &mut dyn CanvasSurface, position: Vec2) {
    use_cases::selection::drag_to(state, surface, position);
}

/// Beendet den laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}
