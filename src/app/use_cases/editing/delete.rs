//! Use-Case: Element oder Segment unter dem Cursor löschen.

use glam::Vec2;

use crate::app::state::DraggedItem;
use crate::app::use_cases::selection;
use crate::app::AppState;
use crate::surface::{CanvasSurface, GeometryOracle};

/// Löscht das oberste Objekt unter der Position.
///
/// Elemente haben Vorrang vor Segmenten; trifft der Klick nichts, ist
/// das ein No-Op. Beim Löschen eines Elements bleiben anliegende
/// Segmente bestehen und werden beim nächsten Propagationslauf
/// unerreichbar.
pub fn delete_at(
    state: &mut AppState,
    surface: &mut dyn CanvasSurface,
    position: Vec2,
    hit_distance: f32,
) {
    let oracle: &dyn GeometryOracle = surface;

    if let Some(element_id) = selection::element_at(&state.network, oracle, position) {
        if let Some(element) = state.network.remove_element(element_id) {
            surface.delete(element.shape);
        }
        if state.selection.dragged == Some(DraggedItem::Element(element_id)) {
            state.selection.clear();
        }
        log::info!("Element {element_id} gelöscht");
        return;
    }

    if let Some(segment_id) = selection::segment_at(&state.network, position, hit_distance) {
        if let Some(segment) = state.network.remove_segment(segment_id) {
            surface.delete(segment.shape);
        }
        if state.selection.dragged == Some(DraggedItem::Segment(segment_id)) {
            state.selection.clear();
        }
        log::info!("Segment {segment_id} gelöscht");
        return;
    }

    log::debug!("Nichts zu löschen an ({:.1}, {:.1})", position.x, position.y);
}
