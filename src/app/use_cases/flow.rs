//! Use-Case: Propagationslauf und Status-Projektion.

use crate::app::AppState;
use crate::core::{propagate, ElementKind, PipeNetwork, PropagationResult};
use crate::surface::{CanvasSurface, GeometryOracle, VisualState};

/// Führt einen vollständigen Propagationslauf aus und projiziert das
/// Ergebnis auf die Canvas-Oberfläche.
pub fn update_flow(
    state: &mut AppState,
    surface: &mut dyn CanvasSurface,
    tolerance: f32,
) -> PropagationResult {
    let oracle: &dyn GeometryOracle = surface;
    let result = propagate(&mut state.network, oracle, tolerance);

    project_status(&state.network, surface);

    let carrying = state.network.segments().filter(|s| s.carries_gas).count();
    log::info!(
        "Propagation: {} von {} Segmenten führen Gas, {} Elemente energisiert",
        carrying,
        state.network.segment_count(),
        result.energized.len()
    );

    result
}

/// Status-Projektor: meldet die `carries_gas`-Flags aller Segmente und
/// den `is_open`-Zustand aller Schalter an den Kollaborateur.
///
/// Schalter werden unabhängig von ihrer Energisierung nach Gate-Zustand
/// gefärbt; Quellen und Verbinder behalten ihre statische Darstellung.
pub fn project_status(network: &PipeNetwork, surface: &mut dyn CanvasSurface) {
    for segment in network.segments() {
        let visual = if segment.carries_gas {
            VisualState::GasFlow
        } else {
            VisualState::Default
        };
        surface.set_visual_state(segment.shape, visual);
    }

    for element in network.elements() {
        if let ElementKind::Switch { is_open } = element.kind {
            let visual = if is_open {
                VisualState::SwitchOn
            } else {
                VisualState::SwitchOff
            };
            surface.set_visual_state(element.shape, visual);
        }
    }
}
