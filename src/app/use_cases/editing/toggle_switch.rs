//! Use-Case: Gate-Zustand eines Schalters umschalten.

use crate::app::AppState;
use crate::surface::{CanvasSurface, VisualState};

/// Schaltet einen Schalter um und meldet den neuen Zustand visuell.
///
/// Der Gate-Zustand ist unabhängig von der Propagation und bleibt bis
/// zum nächsten Toggle bestehen; ein Klick auf ein Nicht-Schalter-Element
/// ist ein No-Op.
pub fn toggle_switch(state: &mut AppState, surface: &mut dyn CanvasSurface, element_id: u64) {
    let Some(is_open) = state.network.toggle_switch(element_id) else {
        log::debug!("Toggle ignoriert: Element {element_id} ist kein Schalter");
        return;
    };

    if let Some(element) = state.network.element(element_id) {
        let visual = if is_open {
            VisualState::SwitchOn
        } else {
            VisualState::SwitchOff
        };
        surface.set_visual_state(element.shape, visual);
    }

    log::info!(
        "Schalter {element_id} ist jetzt {}",
        if is_open { "offen" } else { "geschlossen" }
    );
}
