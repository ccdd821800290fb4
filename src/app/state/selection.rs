use glam::Vec2;

/// Gegriffenes Objekt während eines Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraggedItem {
    /// Ein Element (Quelle, Schalter oder Verbinder)
    Element(u64),
    /// Ein Pipe-Segment
    Segment(u64),
}

/// Auswahlbezogener Anwendungszustand.
///
/// Es gibt höchstens ein gegriffenes Objekt; ohne Treffer unter dem
/// Cursor bleiben Drag-Bewegungen No-Ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionState {
    /// Aktuell gegriffenes Objekt (None = kein Drag aktiv)
    pub dragged: Option<DraggedItem>,
    /// Offset zwischen Klickpunkt und Anker des Objekts beim Greifen
    pub press_offset: Vec2,
}

impl SelectionState {
    /// Erstellt einen leeren Auswahlzustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Beendet einen laufenden Drag.
    pub fn clear(&mut self) {
        self.dragged = None;
        self.press_offset = Vec2::ZERO;
    }
}
