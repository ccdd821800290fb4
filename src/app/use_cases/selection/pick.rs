//! Use-Case: Hit-Tests und Drag-Beginn.

use glam::Vec2;

use crate::app::state::DraggedItem;
use crate::app::AppState;
use crate::core::{geometry, PipeNetwork};
use crate::surface::{CanvasSurface, GeometryOracle};

/// Findet das oberste Element unter der Position.
///
/// Oberste = zuletzt angelegte, daher wird rückwärts iteriert.
/// Der Treffer-Test nutzt die Bounding-Box der Koordinatenliste;
/// Shapes mit ungültiger Geometrie werden übersprungen.
pub fn element_at(
    network: &PipeNetwork,
    oracle: &dyn GeometryOracle,
    position: Vec2,
) -> Option<u64> {
    let elements: Vec<_> = network.elements().collect();
    for element in elements.into_iter().rev() {
        let Some(coords) = oracle.shape_coordinates(element.shape) else {
            continue;
        };
        if coords.len() < 4 || coords.len() % 2 != 0 {
            continue;
        }

        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for pair in coords.chunks_exact(2) {
            min = min.min(Vec2::new(pair[0], pair[1]));
            max = max.max(Vec2::new(pair[0], pair[1]));
        }

        if position.x >= min.x && position.x <= max.x && position.y >= min.y && position.y <= max.y
        {
            return Some(element.id);
        }
    }
    None
}

/// Findet das erste Segment, dessen Linie nah genug an der Position liegt.
pub fn segment_at(network: &PipeNetwork, position: Vec2, hit_distance: f32) -> Option<u64> {
    network
        .segments()
        .find(|segment| {
            geometry::distance_to_segment(position, segment.start, segment.end) <= hit_distance
        })
        .map(|segment| segment.id)
}

/// Greift das Objekt unter der Position und beginnt einen Drag.
///
/// Elemente haben Vorrang vor Segmenten; ohne Treffer bleibt der
/// Auswahlzustand leer (No-Op).
pub fn begin_drag(
    state: &mut AppState,
    surface: &mut dyn CanvasSurface,
    position: Vec2,
    hit_distance: f32,
) {
    let oracle: &dyn GeometryOracle = surface;

    if let Some(element_id) = element_at(&state.network, oracle, position) {
        let anchor = state
            .network
            .element(element_id)
            .and_then(|element| oracle.shape_coordinates(element.shape))
            .filter(|coords| coords.len() >= 2)
            .map(|coords| Vec2::new(coords[0], coords[1]))
            .unwrap_or(position);

        state.selection.dragged = Some(DraggedItem::Element(element_id));
        state.selection.press_offset = position - anchor;
        log::debug!("Drag-Beginn auf Element {element_id}");
        return;
    }

    if let Some(segment_id) = segment_at(&state.network, position, hit_distance) {
        let anchor = state
            .network
            .segment(segment_id)
            .map(|segment| segment.start)
            .unwrap_or(position);

        state.selection.dragged = Some(DraggedItem::Segment(segment_id));
        state.selection.press_offset = position - anchor;
        log::debug!("Drag-Beginn auf Segment {segment_id}");
        return;
    }

    state.selection.clear();
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    state.selection.clear();
}
