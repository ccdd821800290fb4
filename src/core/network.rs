//! Die zentrale Netzwerk-Datenstruktur mit Elementen und Segmenten.

use glam::Vec2;
use indexmap::IndexMap;

use super::{Element, ElementKind, Segment};
use crate::surface::ShapeRef;

#[cfg(test)]
mod tests;

/// Container für das gesamte Pipeline-Netzwerk.
///
/// Einziger Besitzer aller Elemente und Segmente; alle anderen
/// Komponenten arbeiten für die Dauer eines Durchlaufs auf Referenzen.
/// Es gibt bewusst keine persistierte Kantenliste: Nachbarschaft wird
/// bei jedem Propagationslauf aus der Geometrie neu abgeleitet.
#[derive(Debug, Clone, Default)]
pub struct PipeNetwork {
    /// Alle Elemente in Einfügereihenfolge, indexiert nach ID
    elements: IndexMap<u64, Element>,
    /// Alle Segmente in Einfügereihenfolge, indexiert nach ID
    segments: IndexMap<u64, Segment>,
    /// Nächste zu vergebende Element-ID
    next_element_id: u64,
    /// Nächste zu vergebende Segment-ID
    next_segment_id: u64,
}

impl PipeNetwork {
    /// Erstellt ein leeres Netzwerk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Element hinzu und gibt seine ID zurück.
    pub fn add_element(&mut self, kind: ElementKind, shape: ShapeRef) -> u64 {
        let id = self.next_element_id;
        self.next_element_id += 1;
        self.elements.insert(id, Element::new(id, kind, shape));
        id
    }

    /// Entfernt ein Element.
    ///
    /// Anliegende Segmente werden NICHT mitgelöscht; sie werden beim
    /// nächsten Propagationslauf schlicht unerreichbar.
    pub fn remove_element(&mut self, element_id: u64) -> Option<Element> {
        self.elements.shift_remove(&element_id)
    }

    /// Fügt ein Segment hinzu und gibt seine ID zurück.
    pub fn add_segment(&mut self, start: Vec2, end: Vec2, shape: ShapeRef) -> u64 {
        let id = self.next_segment_id;
        self.next_segment_id += 1;
        self.segments.insert(id, Segment::new(id, start, end, shape));
        id
    }

    /// Entfernt ein Segment.
    pub fn remove_segment(&mut self, segment_id: u64) -> Option<Segment> {
        self.segments.shift_remove(&segment_id)
    }

    /// Schaltet den Gate-Zustand eines Schalters um.
    ///
    /// Gibt den neuen Zustand zurück, oder `None` wenn die ID kein
    /// Schalter ist (No-Op laut Fehlerpolitik).
    pub fn toggle_switch(&mut self, element_id: u64) -> Option<bool> {
        let element = self.elements.get_mut(&element_id)?;
        match &mut element.kind {
            ElementKind::Switch { is_open } => {
                *is_open = !*is_open;
                Some(*is_open)
            }
            _ => None,
        }
    }

    /// Schreibt die Endpunkte eines Segments neu (Snap-Verhalten).
    pub fn rewrite_segment_endpoints(&mut self, segment_id: u64, start: Vec2, end: Vec2) -> bool {
        let Some(segment) = self.segments.get_mut(&segment_id) else {
            return false;
        };
        segment.start = start;
        segment.end = end;
        true
    }

    /// Zugriff auf ein Element.
    pub fn element(&self, element_id: u64) -> Option<&Element> {
        self.elements.get(&element_id)
    }

    /// Zugriff auf ein Segment.
    pub fn segment(&self, segment_id: u64) -> Option<&Segment> {
        self.segments.get(&segment_id)
    }

    /// Iteriert über alle Elemente in Einfügereihenfolge.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Iteriert über alle Segmente in Einfügereihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    /// Setzt `carries_gas` aller Segmente zurück (Schritt 1 der Propagation).
    pub fn reset_flow(&mut self) {
        for segment in self.segments.values_mut() {
            segment.carries_gas = false;
        }
    }

    /// Markiert ein Segment als gasführend.
    pub fn mark_segment(&mut self, segment_id: u64) -> bool {
        let Some(segment) = self.segments.get_mut(&segment_id) else {
            return false;
        };
        segment.carries_gas = true;
        true
    }

    /// Gibt die Anzahl der Elemente zurück.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Gibt die Anzahl der Segmente zurück.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
