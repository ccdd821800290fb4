use glam::Vec2;

use crate::core::ElementKind;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Element der gegebenen Art auf dem Platzierungsraster anlegen
    AddElement { kind: ElementKind },
    /// Pipe-Segment mit Standard-Endpunkten anlegen
    AddPipeline,
    /// Element/Segment unter der Position greifen und Drag beginnen
    BeginDrag { position: Vec2, hit_distance: f32 },
    /// Gegriffenes Element/Segment zur Position bewegen (inkl. Snap)
    DragTo { position: Vec2 },
    /// Drag beenden
    EndDrag,
    /// Element/Segment unter der Position löschen
    DeleteAt { position: Vec2, hit_distance: f32 },
    /// Gate-Zustand eines Schalters umschalten
    ToggleSwitch { element_id: u64 },
    /// Propagationslauf ausführen und Status projizieren
    RunPropagation { tolerance: f32 },
}
