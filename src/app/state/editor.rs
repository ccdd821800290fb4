use glam::Vec2;

use crate::core::ElementKind;
use crate::shared::EditorOptions;

/// Platzierungszustand des Editors.
///
/// Zählt die bisher angelegten Elemente je Art, damit neue Elemente
/// versetzt auf einem Raster landen statt übereinander.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorState {
    /// Bisher angelegte Quellen
    pub source_count: u32,
    /// Bisher angelegte Schalter
    pub switch_count: u32,
    /// Bisher angelegte Verbinder
    pub connector_count: u32,
}

impl EditorState {
    /// Erstellt den Standard-Platzierungszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Berechnet die Rasterposition für das nächste Element der Art
    /// und erhöht den zugehörigen Zähler.
    pub fn next_placement(&mut self, kind: ElementKind, options: &EditorOptions) -> Vec2 {
        let (origin, count) = match kind {
            ElementKind::Source => (options.source_origin, &mut self.source_count),
            ElementKind::Switch { .. } => (options.switch_origin, &mut self.switch_count),
            ElementKind::Connector => (options.connector_origin, &mut self.connector_count),
        };

        let column = *count % options.elements_per_row;
        let row = *count / options.elements_per_row;
        *count += 1;

        origin + Vec2::new(column as f32, row as f32) * options.grid_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_walks_the_grid_row_by_row() {
        let options = EditorOptions::default();
        let mut editor = EditorState::new();

        let first = editor.next_placement(ElementKind::Source, &options);
        let second = editor.next_placement(ElementKind::Source, &options);
        assert_eq!(first, options.source_origin);
        assert_eq!(second, options.source_origin + Vec2::new(options.grid_spacing, 0.0));

        // Zeilenumbruch nach elements_per_row Elementen
        for _ in 2..options.elements_per_row {
            editor.next_placement(ElementKind::Source, &options);
        }
        let next_row = editor.next_placement(ElementKind::Source, &options);
        assert_eq!(next_row, options.source_origin + Vec2::new(0.0, options.grid_spacing));
    }

    #[test]
    fn kinds_are_counted_independently() {
        let options = EditorOptions::default();
        let mut editor = EditorState::new();

        editor.next_placement(ElementKind::Source, &options);
        let switch_pos = editor.next_placement(ElementKind::Switch { is_open: false }, &options);

        // Erster Schalter sitzt unversetzt auf seinem eigenen Ursprung
        assert_eq!(switch_pos, options.switch_origin);
    }
}
