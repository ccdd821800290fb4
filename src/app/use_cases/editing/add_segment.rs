//! Use-Case: Neues Pipe-Segment mit Standard-Endpunkten anlegen.

use crate::app::AppState;
use crate::surface::CanvasSurface;

/// Legt ein Segment mit den konfigurierten Standard-Endpunkten an.
pub fn add_pipeline(state: &mut AppState, surface: &mut dyn CanvasSurface) {
    let start = state.options.pipeline_start;
    let end = state.options.pipeline_end;

    let shape = surface.create_segment(start, end);
    let segment_id = state.network.add_segment(start, end, shape);

    log::info!("Segment {segment_id} von ({start}) nach ({end}) angelegt");
}
