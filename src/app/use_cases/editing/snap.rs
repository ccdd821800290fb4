//! Use-Case: Segment-Endpunkte auf Element-Referenzpunkte snappen.

use glam::Vec2;

use crate::app::AppState;
use crate::core::geometry;
use crate::surface::{CanvasSurface, GeometryOracle};

/// Zieht jeden Segment-Endpunkt, der innerhalb der Snap-Toleranz eines
/// Element-Referenzpunkts liegt, exakt auf diesen Punkt.
///
/// Der Rewrite ist atomar pro Endpunkt und wird sowohl im Modell als
/// auch beim Kollaborateur ausgeführt. Elemente mit ungültiger Geometrie
/// bieten in diesem Durchlauf keine Snap-Ziele.
pub fn resnap_segments(state: &mut AppState, surface: &mut dyn CanvasSurface) {
    let tolerance = state.options.snap_tolerance;

    let oracle: &dyn GeometryOracle = surface;
    let centers: Vec<Vec2> = state
        .network
        .elements()
        .filter_map(|element| {
            oracle
                .shape_coordinates(element.shape)
                .as_deref()
                .and_then(geometry::reference_point)
        })
        .collect();

    if centers.is_empty() {
        return;
    }

    let snap_endpoint = |point: Vec2| -> Option<Vec2> {
        centers
            .iter()
            .find(|center| geometry::adjacent(point, **center, tolerance))
            .copied()
    };

    let rewrites: Vec<(u64, Vec2, Vec2, crate::surface::ShapeRef)> = state
        .network
        .segments()
        .filter_map(|segment| {
            let snapped_start = snap_endpoint(segment.start);
            let snapped_end = snap_endpoint(segment.end);
            if snapped_start.is_none() && snapped_end.is_none() {
                return None;
            }
            let start = snapped_start.unwrap_or(segment.start);
            let end = snapped_end.unwrap_or(segment.end);
            if start == segment.start && end == segment.end {
                return None;
            }
            Some((segment.id, start, end, segment.shape))
        })
        .collect();

    for (segment_id, start, end, shape) in rewrites {
        state.network.rewrite_segment_endpoints(segment_id, start, end);
        surface.rewrite_segment_endpoints(shape, start, end);
        log::debug!("Segment {segment_id} auf ({start}, {end}) gesnappt");
    }
}
