//! In-Memory-Canvas für Tests und den Headless-Demo-Betrieb.

use glam::Vec2;
use indexmap::IndexMap;

use super::{CanvasSurface, GeometryOracle, ShapeRef, VisualState};
use crate::core::ElementKind;
use crate::shared::options::{CONNECTOR_SIZE, SOURCE_SIZE, SWITCH_DIAMETER};

/// Hält Koordinatenlisten und visuelle Zustände aller Shapes im Speicher.
///
/// Quellen werden als 4-Koordinaten-Box angelegt, Schalter als Oval
/// (ebenfalls Bounding-Box), Verbinder als Raute mit 8 Koordinaten und
/// Segmente als Linie mit 4 Koordinaten — derselbe Kontrakt, den auch
/// eine echte Canvas-Oberfläche liefert.
#[derive(Debug, Clone, Default)]
pub struct MemoryCanvas {
    shapes: IndexMap<ShapeRef, Vec<f32>>,
    visuals: IndexMap<ShapeRef, VisualState>,
    next_id: u64,
}

impl MemoryCanvas {
    /// Erstellt eine leere Canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt den zuletzt gemeldeten visuellen Zustand einer Shape zurück.
    pub fn visual_state(&self, shape: ShapeRef) -> Option<VisualState> {
        self.visuals.get(&shape).copied()
    }

    /// Gibt die Anzahl existierender Shapes zurück.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Überschreibt die Koordinatenliste einer Shape direkt.
    ///
    /// Nur für Tests gedacht, um transient ungültige Geometrie zu stellen.
    pub fn set_raw_coordinates(&mut self, shape: ShapeRef, coords: Vec<f32>) {
        self.shapes.insert(shape, coords);
    }

    fn insert(&mut self, coords: Vec<f32>) -> ShapeRef {
        let shape = ShapeRef(self.next_id);
        self.next_id += 1;
        self.shapes.insert(shape, coords);
        self.visuals.insert(shape, VisualState::Default);
        shape
    }
}

impl GeometryOracle for MemoryCanvas {
    fn shape_coordinates(&self, shape: ShapeRef) -> Option<Vec<f32>> {
        self.shapes.get(&shape).cloned()
    }
}

impl CanvasSurface for MemoryCanvas {
    fn create_element(&mut self, kind: ElementKind, position: Vec2) -> ShapeRef {
        let (x, y) = (position.x, position.y);
        let coords = match kind {
            ElementKind::Source => vec![x, y, x + SOURCE_SIZE, y + SOURCE_SIZE],
            ElementKind::Switch { .. } => vec![x, y, x + SWITCH_DIAMETER, y + SWITCH_DIAMETER],
            ElementKind::Connector => {
                let half = CONNECTOR_SIZE * 0.5;
                vec![
                    x + half,
                    y,
                    x + CONNECTOR_SIZE,
                    y + half,
                    x + half,
                    y + CONNECTOR_SIZE,
                    x,
                    y + half,
                ]
            }
        };
        self.insert(coords)
    }

    fn create_segment(&mut self, start: Vec2, end: Vec2) -> ShapeRef {
        self.insert(vec![start.x, start.y, end.x, end.y])
    }

    fn translate(&mut self, shape: ShapeRef, delta: Vec2) {
        if let Some(coords) = self.shapes.get_mut(&shape) {
            for pair in coords.chunks_exact_mut(2) {
                pair[0] += delta.x;
                pair[1] += delta.y;
            }
        }
    }

    fn rewrite_segment_endpoints(&mut self, shape: ShapeRef, start: Vec2, end: Vec2) {
        if let Some(coords) = self.shapes.get_mut(&shape) {
            *coords = vec![start.x, start.y, end.x, end.y];
        }
    }

    fn set_visual_state(&mut self, shape: ShapeRef, state: VisualState) {
        if let Some(entry) = self.visuals.get_mut(&shape) {
            *entry = state;
        }
    }

    fn delete(&mut self, shape: ShapeRef) {
        self.shapes.shift_remove(&shape);
        self.visuals.shift_remove(&shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry;

    #[test]
    fn source_shape_center_matches_reference_point_rule() {
        let mut canvas = MemoryCanvas::new();
        let shape = canvas.create_element(ElementKind::Source, Vec2::new(100.0, 100.0));

        let coords = canvas.shape_coordinates(shape).expect("Shape existiert");
        let center = geometry::reference_point(&coords).expect("gültige Box");
        assert_eq!(center, Vec2::new(120.0, 120.0));
    }

    #[test]
    fn connector_shape_is_a_diamond_polygon() {
        let mut canvas = MemoryCanvas::new();
        let shape = canvas.create_element(ElementKind::Connector, Vec2::new(0.0, 0.0));

        let coords = canvas.shape_coordinates(shape).expect("Shape existiert");
        assert_eq!(coords.len(), 8);
        let center = geometry::reference_point(&coords).expect("gültiges Polygon");
        assert_eq!(center, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn translate_moves_every_coordinate_pair() {
        let mut canvas = MemoryCanvas::new();
        let shape = canvas.create_segment(Vec2::ZERO, Vec2::new(100.0, 0.0));

        canvas.translate(shape, Vec2::new(10.0, 5.0));

        let coords = canvas.shape_coordinates(shape).unwrap();
        assert_eq!(coords, vec![10.0, 5.0, 110.0, 5.0]);
    }

    #[test]
    fn delete_removes_shape_and_visual_state() {
        let mut canvas = MemoryCanvas::new();
        let shape = canvas.create_segment(Vec2::ZERO, Vec2::new(10.0, 0.0));
        canvas.set_visual_state(shape, VisualState::GasFlow);

        canvas.delete(shape);

        assert!(canvas.shape_coordinates(shape).is_none());
        assert!(canvas.visual_state(shape).is_none());
        assert_eq!(canvas.shape_count(), 0);
    }
}
