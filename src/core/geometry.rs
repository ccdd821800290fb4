//! Connectivity-Resolver: Referenzpunkte und Nachbarschaftstest.

use glam::Vec2;

/// Standard-Snap-Toleranz in Canvas-Einheiten.
///
/// Zwei Referenzpunkte gelten als benachbart, wenn beide Achsabstände
/// strikt unter dieser Schwelle liegen.
pub const SNAP_TOLERANCE: f32 = 20.0;

/// Prüft Nachbarschaft zweier Punkte per achsweisem Abstandstest.
///
/// Bewusst kein euklidischer Kreistest: die Semantik (billiger Box-Test,
/// strikt `<` auf beiden Achsen) ist Teil des Kontrakts.
pub fn adjacent(a: Vec2, b: Vec2, tolerance: f32) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}

/// Berechnet den Referenzpunkt (Zentroid) einer Koordinatenliste.
///
/// - 4 Werte (Rechteck/Oval als Bounding-Box): Mittelpunkt der Diagonale.
/// - 8 Werte (Polygon mit 4 Ecken): arithmetisches Mittel der Ecken.
/// - Alles andere gilt als transient ungültige Geometrie → `None`.
pub fn reference_point(coords: &[f32]) -> Option<Vec2> {
    match coords.len() {
        4 => Some(Vec2::new(
            (coords[0] + coords[2]) * 0.5,
            (coords[1] + coords[3]) * 0.5,
        )),
        8 => {
            let sum_x: f32 = coords.iter().step_by(2).sum();
            let sum_y: f32 = coords.iter().skip(1).step_by(2).sum();
            Some(Vec2::new(sum_x * 0.25, sum_y * 0.25))
        }
        _ => None,
    }
}

/// Abstand eines Punkts zur Strecke zwischen `start` und `end`.
///
/// Für Hit-Tests auf Segmente (Löschen/Drag per Klick auf die Linie).
pub fn distance_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let delta = end - start;
    let length_sq = delta.length_squared();
    if length_sq == 0.0 {
        return (point - start).length();
    }

    let t = ((point - start).dot(delta) / length_sq).clamp(0.0, 1.0);
    let closest = start + delta * t;
    (point - closest).length()
}
