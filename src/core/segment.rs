//! Repräsentiert ein Pipe-Segment mit zwei Endpunkten.

use glam::Vec2;

use crate::surface::ShapeRef;

/// Ein Pipe-Segment (Kanten-Kandidat).
///
/// Die Endpunkte im Modell sind die Quelle der Wahrheit; das Shape-Handle
/// dient nur der visuellen Darstellung beim Kollaborateur.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    /// Eindeutige ID innerhalb des Netzwerks
    pub id: u64,
    /// Erster Endpunkt
    pub start: Vec2,
    /// Zweiter Endpunkt
    pub end: Vec2,
    /// Führt das Segment aktuell Gas? Wird vor jedem Propagationslauf
    /// zurückgesetzt und nie zwischen Läufen persistiert.
    pub carries_gas: bool,
    /// Handle auf die Linien-Darstellung beim Kollaborateur
    pub shape: ShapeRef,
}

impl Segment {
    /// Erstellt ein neues Segment ohne Gasfluss.
    pub fn new(id: u64, start: Vec2, end: Vec2, shape: ShapeRef) -> Self {
        Self {
            id,
            start,
            end,
            carries_gas: false,
            shape,
        }
    }

    /// Mittelpunkt des Segments (für Hit-Tests und Anzeige).
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}
