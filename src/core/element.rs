//! Repräsentiert ein platziertes Netzwerk-Element (Quelle, Schalter, Verbinder).

use crate::surface::ShapeRef;

/// Art eines Elements.
///
/// Nur Schalter tragen einen Gate-Zustand; Quellen und Verbinder
/// können konstruktionsbedingt keinen führen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Gasquelle: speist das Netzwerk, immer energisiert
    Source,
    /// Schalter: lässt Gas nur im geöffneten Zustand durch
    Switch {
        /// Gate-Zustand (initial geschlossen)
        is_open: bool,
    },
    /// Verbinder: lässt Gas immer durch
    Connector,
}

impl ElementKind {
    /// Gibt `true` zurück, wenn das Element Propagation durchlässt.
    ///
    /// Quellen und Verbinder sind immer offen; Schalter nur bei `is_open`.
    pub fn passes_flow(&self) -> bool {
        match self {
            ElementKind::Switch { is_open } => *is_open,
            ElementKind::Source | ElementKind::Connector => true,
        }
    }

    /// Gibt `true` zurück, wenn es sich um eine Gasquelle handelt.
    pub fn is_source(&self) -> bool {
        matches!(self, ElementKind::Source)
    }
}

/// Ein platziertes Netzwerk-Element.
///
/// Die Geometrie lebt beim Canvas-Kollaborateur; das Element hält nur
/// das opake Shape-Handle, über das der Referenzpunkt abgefragt wird.
#[derive(Debug, Clone, Copy)]
pub struct Element {
    /// Eindeutige ID innerhalb des Netzwerks
    pub id: u64,
    /// Art des Elements
    pub kind: ElementKind,
    /// Handle in die Geometrie des Canvas-Kollaborateurs
    pub shape: ShapeRef,
}

impl Element {
    /// Erstellt ein neues Element.
    pub fn new(id: u64, kind: ElementKind, shape: ShapeRef) -> Self {
        Self { id, kind, shape }
    }
}
