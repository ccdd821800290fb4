use glam::Vec2;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neue Gasquelle auf dem Platzierungsraster anlegen
    AddSourceRequested,
    /// Neuen Schalter auf dem Platzierungsraster anlegen
    AddSwitchRequested,
    /// Neuen Verbinder auf dem Platzierungsraster anlegen
    AddConnectorRequested,
    /// Neues Pipe-Segment mit Standard-Endpunkten anlegen
    AddPipelineRequested,
    /// Primärtaste gedrückt: Element oder Segment unter dem Cursor greifen
    PrimaryPressed { position: Vec2 },
    /// Cursor bei gehaltener Primärtaste bewegt
    DragMoved { position: Vec2 },
    /// Primärtaste losgelassen: Drag beenden
    Released,
    /// Sekundärtaste gedrückt: Element oder Segment unter dem Cursor löschen
    SecondaryPressed { position: Vec2 },
    /// Direkter Klick auf einen Schalter: Gate-Zustand umschalten
    SwitchClicked { element_id: u64 },
    /// Propagationslauf anfordern ("Update Colors")
    UpdateFlowRequested,
}
