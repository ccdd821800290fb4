//! Propagations-Engine: Flutung des Netzwerks von allen Gasquellen aus.

use std::collections::HashSet;

use glam::Vec2;

use super::{geometry, PipeNetwork};
use crate::surface::GeometryOracle;

/// Ergebnis eines Propagationslaufs.
///
/// `carries_gas` wird direkt an den Segmenten im Netzwerk gesetzt;
/// die energisierten Elemente werden hier zurückgegeben, da sie
/// keinen persistierten Zustand besitzen.
#[derive(Debug, Clone, Default)]
pub struct PropagationResult {
    /// IDs aller Elemente, die von einer Quelle aus erreichbar sind
    pub energized: HashSet<u64>,
}

/// Pro Durchlauf eingefrorenes Element-Profil.
///
/// Die Geometrie ändert sich während eines Laufs nicht (der Orakel-Zugriff
/// ist seiteneffektfrei), daher werden die Referenzpunkte einmal vorab
/// aufgelöst. Elemente mit ungültiger Geometrie behalten `center = None`
/// und tragen in diesem Lauf keine Kanten bei.
struct ElementProfile {
    id: u64,
    passes_flow: bool,
    center: Option<Vec2>,
}

/// Führt einen vollständigen Propagationslauf aus.
///
/// Setzt alle `carries_gas`-Flags zurück, energisiert jede Quelle und
/// flutet per expliziter Arbeits-Stack-Traversierung (nicht rekursiv):
/// ein gepopptes Element markiert alle benachbarten, noch unmarkierten
/// Segmente; jedes frisch markierte Segment energisiert sofort alle
/// benachbarten, durchlässigen Elemente und legt sie auf den Stack.
/// Geschlossene Schalter werden nie energisiert und blockieren damit
/// alles, was nur über sie erreichbar wäre.
///
/// Terminierung: Elemente und Segmente wechseln monoton von unmarkiert
/// zu markiert, und nur unmarkierte Elemente landen auf dem Stack.
pub fn propagate(
    network: &mut PipeNetwork,
    oracle: &dyn GeometryOracle,
    tolerance: f32,
) -> PropagationResult {
    network.reset_flow();

    let profiles: Vec<ElementProfile> = network
        .elements()
        .map(|element| ElementProfile {
            id: element.id,
            passes_flow: element.kind.passes_flow(),
            center: oracle
                .shape_coordinates(element.shape)
                .as_deref()
                .and_then(geometry::reference_point),
        })
        .collect();

    let mut energized: HashSet<u64> = HashSet::new();
    let mut stack: Vec<u64> = Vec::new();

    for element in network.elements() {
        if element.kind.is_source() {
            energized.insert(element.id);
            stack.push(element.id);
        }
    }

    while let Some(current_id) = stack.pop() {
        let Some(center) = profiles
            .iter()
            .find(|p| p.id == current_id)
            .and_then(|p| p.center)
        else {
            // Transient ungültige Geometrie: keine Kanten in diesem Lauf
            continue;
        };

        let newly_marked: Vec<(u64, Vec2, Vec2)> = network
            .segments()
            .filter(|segment| {
                !segment.carries_gas
                    && (geometry::adjacent(segment.start, center, tolerance)
                        || geometry::adjacent(segment.end, center, tolerance))
            })
            .map(|segment| (segment.id, segment.start, segment.end))
            .collect();

        for (segment_id, start, end) in newly_marked {
            network.mark_segment(segment_id);

            // Durch das frisch markierte Segment weiterpropagieren
            for profile in &profiles {
                if energized.contains(&profile.id) {
                    continue;
                }
                let Some(element_center) = profile.center else {
                    continue;
                };
                if !geometry::adjacent(start, element_center, tolerance)
                    && !geometry::adjacent(end, element_center, tolerance)
                {
                    continue;
                }
                // Gating: geschlossene Schalter werden nicht energisiert
                if !profile.passes_flow {
                    continue;
                }
                energized.insert(profile.id);
                stack.push(profile.id);
            }
        }
    }

    PropagationResult { energized }
}
