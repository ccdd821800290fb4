use crate::app::CommandLog;
use crate::core::PipeNetwork;
use crate::shared::EditorOptions;

use super::{EditorState, SelectionState};

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Das Pipeline-Netzwerk (einziger Besitzer von Elementen und Segmenten)
    pub network: PipeNetwork,
    /// Drag-/Auswahl-Zustand
    pub selection: SelectionState,
    /// Platzierungszustand für neue Elemente
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Toleranzen, Raster, Positionen)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            network: PipeNetwork::new(),
            selection: SelectionState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
        }
    }

    /// Gibt die Anzahl der Elemente zurück (für UI-Anzeige).
    pub fn element_count(&self) -> usize {
        self.network.element_count()
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige).
    pub fn segment_count(&self) -> usize {
        self.network.segment_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
