//! Use-Case: Neues Element auf dem Platzierungsraster anlegen.

use crate::app::AppState;
use crate::core::ElementKind;
use crate::surface::CanvasSurface;

/// Legt ein Element der gegebenen Art an der nächsten Rasterposition an.
///
/// Erstellt zuerst die Shape beim Kollaborateur und übernimmt das
/// Handle ins Netzwerk.
pub fn add_element(state: &mut AppState, surface: &mut dyn CanvasSurface, kind: ElementKind) {
    let position = state.editor.next_placement(kind, &state.options);
    let shape = surface.create_element(kind, position);
    let element_id = state.network.add_element(kind, shape);

    log::info!(
        "Element {element_id} ({kind:?}) an Position ({:.1}, {:.1}) angelegt",
        position.x,
        position.y
    );
}
