//! Eigenschaften des Propagationslaufs auf realistisch platzierten Netzen.

use glam::Vec2;

use gasline_editor::{
    propagate, CanvasSurface, ElementKind, MemoryCanvas, PipeNetwork, SNAP_TOLERANCE,
};

/// Platziert ein Element so, dass sein Referenzpunkt auf `center` liegt.
fn place(
    canvas: &mut MemoryCanvas,
    network: &mut PipeNetwork,
    kind: ElementKind,
    center: Vec2,
) -> u64 {
    let half = match kind {
        ElementKind::Source | ElementKind::Switch { .. } => 20.0,
        ElementKind::Connector => 15.0,
    };
    let shape = canvas.create_element(kind, center - Vec2::splat(half));
    network.add_element(kind, shape)
}

fn pipe(canvas: &mut MemoryCanvas, network: &mut PipeNetwork, start: Vec2, end: Vec2) -> u64 {
    let shape = canvas.create_segment(start, end);
    network.add_segment(start, end, shape)
}

#[test]
fn gating_chain_blocks_behind_closed_switch() {
    let mut canvas = MemoryCanvas::new();
    let mut network = PipeNetwork::new();

    place(&mut canvas, &mut network, ElementKind::Source, Vec2::new(0.0, 0.0));
    let switch = place(
        &mut canvas,
        &mut network,
        ElementKind::Switch { is_open: false },
        Vec2::new(100.0, 0.0),
    );
    let connector = place(
        &mut canvas,
        &mut network,
        ElementKind::Connector,
        Vec2::new(200.0, 0.0),
    );
    let upstream = pipe(&mut canvas, &mut network, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
    let downstream = pipe(&mut canvas, &mut network, Vec2::new(100.0, 0.0), Vec2::new(200.0, 0.0));

    let result = propagate(&mut network, &canvas, SNAP_TOLERANCE);

    assert!(network.segment(upstream).unwrap().carries_gas);
    assert!(!network.segment(downstream).unwrap().carries_gas);
    assert!(!result.energized.contains(&switch));
    assert!(!result.energized.contains(&connector));
}

#[test]
fn reopening_switch_restores_and_reclosing_resets_downstream_flow() {
    let mut canvas = MemoryCanvas::new();
    let mut network = PipeNetwork::new();

    place(&mut canvas, &mut network, ElementKind::Source, Vec2::new(0.0, 0.0));
    let switch = place(
        &mut canvas,
        &mut network,
        ElementKind::Switch { is_open: false },
        Vec2::new(100.0, 0.0),
    );
    pipe(&mut canvas, &mut network, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
    let downstream = pipe(&mut canvas, &mut network, Vec2::new(100.0, 0.0), Vec2::new(200.0, 0.0));

    propagate(&mut network, &canvas, SNAP_TOLERANCE);
    assert!(!network.segment(downstream).unwrap().carries_gas);

    // Schalter öffnen: Downstream wird versorgt
    assert_eq!(network.toggle_switch(switch), Some(true));
    propagate(&mut network, &canvas, SNAP_TOLERANCE);
    assert!(network.segment(downstream).unwrap().carries_gas);

    // Wieder schließen: vollständige Neuberechnung setzt zurück
    assert_eq!(network.toggle_switch(switch), Some(false));
    propagate(&mut network, &canvas, SNAP_TOLERANCE);
    assert!(!network.segment(downstream).unwrap().carries_gas);
}

#[test]
fn per_axis_offset_at_tolerance_is_not_adjacent() {
    let mut canvas = MemoryCanvas::new();
    let mut network = PipeNetwork::new();

    place(&mut canvas, &mut network, ElementKind::Source, Vec2::new(0.0, 0.0));
    // Endpunkt exakt auf der Schwelle (20, 20): KEIN Kontakt
    let out_of_reach = pipe(
        &mut canvas,
        &mut network,
        Vec2::new(20.0, 20.0),
        Vec2::new(300.0, 300.0),
    );
    // Endpunkt knapp darunter (19, 19): Kontakt
    let in_reach = pipe(
        &mut canvas,
        &mut network,
        Vec2::new(19.0, 19.0),
        Vec2::new(300.0, 400.0),
    );

    propagate(&mut network, &canvas, SNAP_TOLERANCE);

    assert!(!network.segment(out_of_reach).unwrap().carries_gas);
    assert!(network.segment(in_reach).unwrap().carries_gas);
}

#[test]
fn disconnected_segment_never_carries_gas() {
    let mut canvas = MemoryCanvas::new();
    let mut network = PipeNetwork::new();

    place(&mut canvas, &mut network, ElementKind::Source, Vec2::new(0.0, 0.0));
    pipe(&mut canvas, &mut network, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
    let stray = pipe(
        &mut canvas,
        &mut network,
        Vec2::new(500.0, 500.0),
        Vec2::new(600.0, 500.0),
    );

    propagate(&mut network, &canvas, SNAP_TOLERANCE);

    assert!(!network.segment(stray).unwrap().carries_gas);
}

#[test]
fn two_sources_energize_disjoint_subnetworks_independently() {
    let mut canvas = MemoryCanvas::new();
    let mut network = PipeNetwork::new();

    // Subnetz A
    place(&mut canvas, &mut network, ElementKind::Source, Vec2::new(0.0, 0.0));
    let a_connector = place(
        &mut canvas,
        &mut network,
        ElementKind::Connector,
        Vec2::new(100.0, 0.0),
    );
    let a_pipe = pipe(&mut canvas, &mut network, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));

    // Subnetz B, weit entfernt
    place(
        &mut canvas,
        &mut network,
        ElementKind::Source,
        Vec2::new(1000.0, 1000.0),
    );
    let b_connector = place(
        &mut canvas,
        &mut network,
        ElementKind::Connector,
        Vec2::new(1100.0, 1000.0),
    );
    let b_pipe = pipe(
        &mut canvas,
        &mut network,
        Vec2::new(1000.0, 1000.0),
        Vec2::new(1100.0, 1000.0),
    );

    let result = propagate(&mut network, &canvas, SNAP_TOLERANCE);

    assert!(network.segment(a_pipe).unwrap().carries_gas);
    assert!(network.segment(b_pipe).unwrap().carries_gas);
    assert!(result.energized.contains(&a_connector));
    assert!(result.energized.contains(&b_connector));
}

#[test]
fn energized_set_equals_reachable_set_over_open_paths() {
    let mut canvas = MemoryCanvas::new();
    let mut network = PipeNetwork::new();

    // Quelle → offener Schalter → Verbinder, plus ein abgehängter Verbinder
    let source = place(&mut canvas, &mut network, ElementKind::Source, Vec2::new(0.0, 0.0));
    let open_switch = place(
        &mut canvas,
        &mut network,
        ElementKind::Switch { is_open: true },
        Vec2::new(100.0, 0.0),
    );
    let connector = place(
        &mut canvas,
        &mut network,
        ElementKind::Connector,
        Vec2::new(200.0, 0.0),
    );
    let isolated = place(
        &mut canvas,
        &mut network,
        ElementKind::Connector,
        Vec2::new(500.0, 500.0),
    );
    pipe(&mut canvas, &mut network, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
    pipe(&mut canvas, &mut network, Vec2::new(100.0, 0.0), Vec2::new(200.0, 0.0));

    let result = propagate(&mut network, &canvas, SNAP_TOLERANCE);

    let expected: std::collections::HashSet<u64> =
        [source, open_switch, connector].into_iter().collect();
    assert_eq!(result.energized, expected);
    assert!(!result.energized.contains(&isolated));
}

#[test]
fn repeated_runs_without_structural_change_are_identical() {
    let mut canvas = MemoryCanvas::new();
    let mut network = PipeNetwork::new();

    place(&mut canvas, &mut network, ElementKind::Source, Vec2::new(0.0, 0.0));
    place(
        &mut canvas,
        &mut network,
        ElementKind::Switch { is_open: true },
        Vec2::new(100.0, 0.0),
    );
    pipe(&mut canvas, &mut network, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
    pipe(&mut canvas, &mut network, Vec2::new(100.0, 0.0), Vec2::new(200.0, 0.0));
    pipe(&mut canvas, &mut network, Vec2::new(400.0, 400.0), Vec2::new(500.0, 400.0));

    let first = propagate(&mut network, &canvas, SNAP_TOLERANCE);
    let first_marks: Vec<(u64, bool)> =
        network.segments().map(|s| (s.id, s.carries_gas)).collect();

    let second = propagate(&mut network, &canvas, SNAP_TOLERANCE);
    let second_marks: Vec<(u64, bool)> =
        network.segments().map(|s| (s.id, s.carries_gas)).collect();

    assert_eq!(first.energized, second.energized);
    assert_eq!(first_marks, second_marks);
}
