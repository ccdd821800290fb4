//! Schnittstelle zum Canvas-Kollaborateur (Geometrie-Orakel + Darstellung).
//!
//! Der Core kennt die Canvas-Oberfläche nur über diese Traits. Alle
//! Geometrieabfragen sind synchron und seiteneffektfrei; mutierende
//! Aufrufe (verschieben, Endpunkte neu schreiben, löschen) kommen
//! ausschließlich aus der Application-Schicht.

pub mod memory;

pub use memory::MemoryCanvas;

use glam::Vec2;

use crate::core::ElementKind;

/// Opakes Handle auf eine Shape beim Kollaborateur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeRef(pub u64);

/// Visueller Zustand, den der Status-Projektor meldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// Neutraler Grundzustand (kein Fluss)
    Default,
    /// Segment führt Gas
    GasFlow,
    /// Schalter ist geöffnet
    SwitchOn,
    /// Schalter ist geschlossen
    SwitchOff,
}

/// Read-only Geometrieabfragen — alles, was die Propagations-Engine braucht.
pub trait GeometryOracle {
    /// Gibt die aktuelle Koordinatenliste einer Shape zurück.
    ///
    /// 4 Werte für Box/Oval/Linie, 8 für ein Polygon mit 4 Ecken.
    /// `None`, wenn das Handle nicht (mehr) existiert.
    fn shape_coordinates(&self, shape: ShapeRef) -> Option<Vec<f32>>;
}

/// Vollständige Kollaborateur-Schnittstelle für die Application-Schicht.
pub trait CanvasSurface: GeometryOracle {
    /// Erstellt die Shape eines neuen Elements an der gegebenen Position.
    fn create_element(&mut self, kind: ElementKind, position: Vec2) -> ShapeRef;

    /// Erstellt die Linien-Shape eines neuen Segments.
    fn create_segment(&mut self, start: Vec2, end: Vec2) -> ShapeRef;

    /// Verschiebt eine Shape um das gegebene Delta.
    fn translate(&mut self, shape: ShapeRef, delta: Vec2);

    /// Schreibt die Endpunkte einer Segment-Linie neu (Snap-Verhalten).
    fn rewrite_segment_endpoints(&mut self, shape: ShapeRef, start: Vec2, end: Vec2);

    /// Setzt den visuellen Zustand einer Shape.
    fn set_visual_state(&mut self, shape: ShapeRef, state: VisualState);

    /// Entfernt eine Shape.
    fn delete(&mut self, shape: ShapeRef);
}
