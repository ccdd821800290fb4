use glam::Vec2;

use super::*;

fn shape(id: u64) -> ShapeRef {
    ShapeRef(id)
}

#[test]
fn add_element_assigns_increasing_ids() {
    let mut network = PipeNetwork::new();
    let a = network.add_element(ElementKind::Source, shape(1));
    let b = network.add_element(ElementKind::Connector, shape(2));

    assert_ne!(a, b);
    assert_eq!(network.element_count(), 2);
    assert!(network.element(a).unwrap().kind.is_source());
}

#[test]
fn remove_element_keeps_segments_dangling() {
    let mut network = PipeNetwork::new();
    let source = network.add_element(ElementKind::Source, shape(1));
    let segment = network.add_segment(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), shape(2));

    assert!(network.remove_element(source).is_some());

    // Kein kaskadierendes Löschen: das Segment bleibt bestehen
    assert_eq!(network.element_count(), 0);
    assert_eq!(network.segment_count(), 1);
    assert!(network.segment(segment).is_some());
}

#[test]
fn toggle_switch_flips_gate_state() {
    let mut network = PipeNetwork::new();
    let switch = network.add_element(ElementKind::Switch { is_open: false }, shape(1));

    assert_eq!(network.toggle_switch(switch), Some(true));
    assert_eq!(network.toggle_switch(switch), Some(false));
}

#[test]
fn toggle_non_switch_is_noop() {
    let mut network = PipeNetwork::new();
    let connector = network.add_element(ElementKind::Connector, shape(1));

    assert_eq!(network.toggle_switch(connector), None);
    assert_eq!(network.toggle_switch(999), None);
    // Zustand unverändert
    assert_eq!(
        network.element(connector).unwrap().kind,
        ElementKind::Connector
    );
}

#[test]
fn rewrite_segment_endpoints_updates_model() {
    let mut network = PipeNetwork::new();
    let segment = network.add_segment(Vec2::ZERO, Vec2::new(100.0, 0.0), shape(1));

    assert!(network.rewrite_segment_endpoints(
        segment,
        Vec2::new(10.0, 10.0),
        Vec2::new(90.0, 10.0)
    ));

    let seg = network.segment(segment).unwrap();
    assert_eq!(seg.start, Vec2::new(10.0, 10.0));
    assert_eq!(seg.end, Vec2::new(90.0, 10.0));

    assert!(!network.rewrite_segment_endpoints(999, Vec2::ZERO, Vec2::ZERO));
}

#[test]
fn reset_flow_clears_all_marks() {
    let mut network = PipeNetwork::new();
    let a = network.add_segment(Vec2::ZERO, Vec2::new(50.0, 0.0), shape(1));
    let b = network.add_segment(Vec2::new(50.0, 0.0), Vec2::new(100.0, 0.0), shape(2));

    assert!(network.mark_segment(a));
    assert!(network.mark_segment(b));
    network.reset_flow();

    assert!(network.segments().all(|s| !s.carries_gas));
}

#[test]
fn iteration_order_is_insertion_order() {
    let mut network = PipeNetwork::new();
    let first = network.add_element(ElementKind::Source, shape(1));
    let second = network.add_element(ElementKind::Connector, shape(2));
    let third = network.add_element(ElementKind::Switch { is_open: false }, shape(3));

    let ids: Vec<u64> = network.elements().map(|e| e.id).collect();
    assert_eq!(ids, vec![first, second, third]);
}
