//! Gasline Editor — Headless-Demo.
//!
//! Fährt eine geskriptete Editier-Sitzung gegen die In-Memory-Canvas:
//! Elemente platzieren, Segmente ziehen und snappen, Schalter toggeln
//! und den Gasfluss propagieren.

use glam::Vec2;

use gasline_editor::{
    AppController, AppIntent, AppState, CanvasSurface, EditorOptions, ElementKind, MemoryCanvas,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Gasline Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = EditorOptions::load_from_file(&EditorOptions::default_path());

    let mut state = AppState::new();
    state.options = options;
    let mut surface = MemoryCanvas::new();
    let mut controller = AppController::new();

    run_demo_session(&mut controller, &mut state, &mut surface)?;

    log::info!(
        "Sitzung beendet: {} Elemente, {} Segmente",
        state.element_count(),
        state.segment_count()
    );

    Ok(())
}

/// Baut die Kette Quelle → Segment → Schalter → Segment → Verbinder auf,
/// schaltet den Schalter und propagiert nach jedem Schritt.
fn run_demo_session(
    controller: &mut AppController,
    state: &mut AppState,
    surface: &mut MemoryCanvas,
) -> anyhow::Result<()> {
    controller.handle_intent(state, surface, AppIntent::AddSourceRequested)?;
    controller.handle_intent(state, surface, AppIntent::AddSwitchRequested)?;
    controller.handle_intent(state, surface, AppIntent::AddConnectorRequested)?;
    controller.handle_intent(state, surface, AppIntent::AddPipelineRequested)?;
    controller.handle_intent(state, surface, AppIntent::AddPipelineRequested)?;

    // Erstes Segment zwischen Quelle und Schalter einhängen
    drag_segment_between(controller, state, surface, 0, Vec2::new(120.0, 120.0))?;
    // Zweites Segment zwischen Schalter und Verbinder einhängen
    drag_segment_between(controller, state, surface, 1, Vec2::new(220.0, 120.0))?;

    // Schalter geschlossen: nur das quellseitige Segment führt Gas
    controller.handle_intent(state, surface, AppIntent::UpdateFlowRequested)?;
    report_flow(state);

    let switch_id = state
        .network
        .elements()
        .find(|element| matches!(element.kind, ElementKind::Switch { .. }))
        .map(|element| element.id)
        .ok_or_else(|| anyhow::anyhow!("Demo-Sitzung enthält keinen Schalter"))?;

    controller.handle_intent(state, surface, AppIntent::SwitchClicked { element_id: switch_id })?;
    controller.handle_intent(state, surface, AppIntent::UpdateFlowRequested)?;
    report_flow(state);

    Ok(())
}

/// Zieht das n-te Segment so, dass sein Startpunkt auf der Zielposition
/// landet; das Snapping hängt beide Endpunkte an nahe Elementzentren.
fn drag_segment_between(
    controller: &mut AppController,
    state: &mut AppState,
    surface: &mut dyn CanvasSurface,
    segment_index: usize,
    target: Vec2,
) -> anyhow::Result<()> {
    let Some(grip) = state.network.segments().nth(segment_index).map(|s| s.midpoint()) else {
        return Ok(());
    };

    controller.handle_intent(state, surface, AppIntent::PrimaryPressed { position: grip })?;
    let Some(start) = state.network.segments().nth(segment_index).map(|s| s.start) else {
        return Ok(());
    };
    let position = target + (grip - start);
    controller.handle_intent(state, surface, AppIntent::DragMoved { position })?;
    controller.handle_intent(state, surface, AppIntent::Released)?;

    Ok(())
}

fn report_flow(state: &AppState) {
    for segment in state.network.segments() {
        log::info!(
            "Segment {}: {}",
            segment.id,
            if segment.carries_gas {
                "führt Gas"
            } else {
                "kein Fluss"
            }
        );
    }
}
