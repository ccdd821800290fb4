/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Netzwerk, Drag, Platzierung).
mod app_state;
mod editor;
mod selection;

pub use app_state::AppState;
pub use editor::EditorState;
pub use selection::{DraggedItem, SelectionState};
