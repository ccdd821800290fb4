//! Handler für strukturelle Netz-Änderungen.

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ElementKind;
use crate::surface::CanvasSurface;

/// Legt ein neues Element auf dem Platzierungsraster an.
pub fn add_element(state: &mut AppState, surface: &mut dyn CanvasSurface, kind: ElementKind) {
    use_cases::editing::add_element(state, surface, kind);
}

/// Legt ein neues Pipe-Segment mit Standard-Endpunkten an.
pub fn add_pipeline(state: &mut AppState, surface: &mut dyn CanvasSurface) {
    use_cases::editing::add_pipeline(state, surface);
}

/// Löscht das Objekt unter der Position.
pub fn delete_at(
    state: &mut AppState,
    surface: &mut dyn CanvasSurface,
    position: Vec2,
    hit_distance: f32,
) {
    use_cases::editing::delete_at(state, surface, position, hit_distance);
}

/// Schaltet einen Schalter um.
pub fn toggle_switch(state: &mut AppState, surface: &mut dyn CanvasSurface, element_id: u64) {
    use_cases::editing::toggle_switch(state, surface, element_id);
}
