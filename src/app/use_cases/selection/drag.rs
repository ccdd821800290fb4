//! Use-Case: Verschieben des gegriffenen Objekts.

use glam::Vec2;

use crate::app::state::DraggedItem;
use crate::app::use_cases::editing::snap;
use crate::app::AppState;
use crate::surface::{CanvasSurface, GeometryOracle};

/// Bewegt das gegriffene Objekt so, dass es dem Cursor unter Beibehaltung
/// des Greif-Offsets folgt. Nach jeder Bewegung werden Segment-Endpunkte
/// neu auf Element-Referenzpunkte gesnappt.
pub fn drag_to(state: &mut AppState, surface: &mut dyn CanvasSurface, position: Vec2) {
    let Some(dragged) = state.selection.dragged else {
        return;
    };

    let target_anchor = position - state.selection.press_offset;

    match dragged {
        DraggedItem::Element(element_id) => {
            let Some(element) = state.network.element(element_id) else {
                state.selection.clear();
                return;
            };
            let shape = element.shape;

            let oracle: &dyn GeometryOracle = surface;
            let Some(coords) = oracle.shape_coordinates(shape) else {
                return;
            };
            if coords.len() < 2 {
                return;
            }

            let current_anchor = Vec2::new(coords[0], coords[1]);
            let delta = target_anchor - current_anchor;
            if delta == Vec2::ZERO {
                return;
            }
            surface.translate(shape, delta);
        }
        DraggedItem::Segment(segment_id) => {
            let Some(segment) = state.network.segment(segment_id) else {
                state.selection.clear();
                return;
            };

            let delta = target_anchor - segment.start;
            if delta == Vec2::ZERO {
                return;
            }
            let (start, end, shape) = (segment.start + delta, segment.end + delta, segment.shape);
            state.network.rewrite_segment_endpoints(segment_id, start, end);
            surface.rewrite_segment_endpoints(shape, start, end);
        }
    }

    // Nach jeder Bewegung: Endpunkte in Toleranz auf Elementzentren ziehen
    snap::resnap_segments(state, surface);
}
