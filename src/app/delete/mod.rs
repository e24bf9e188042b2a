//! Lösch-Kollaborateur: Raum-Abfragen entlang roher Strich-Segmente.

use std::collections::{HashMap, HashSet};

use glam::Vec3;

use crate::core::SpatialIndex;
use crate::shared::geometry::point_segment_distance;

/// Kontrakt des Lösch-Kollaborateurs.
///
/// Wird ausschließlich im Delete-Modus angesprochen: rohe Segmentpaare
/// während des Zeichnens, ein `finalize_area` beim Deaktivieren des
/// Werkzeugs.
pub trait DeleteCollaborator {
    /// Verarbeitet ein einzelnes rohes Strich-Segment.
    fn process_segment(&mut self, start: Vec3, end: Vec3);
    /// Schließt den Lösch-Bereich ab und liefert die Anzahl gelöschter Objekte.
    fn finalize_area(&mut self) -> usize;
}

/// KD-Tree-gestützte Lösch-Warteschlange über registrierten Szenen-Objekten.
///
/// Objekte innerhalb des Korridors werden während des Strichs nur
/// gesammelt und erst beim Abschluss entfernt — mehrfach getroffene
/// Objekte zählen einfach.
pub struct SpatialDeleteQueue {
    objects: HashMap<u64, Vec3>,
    index: SpatialIndex,
    corridor_radius: f32,
    pending: HashSet<u64>,
}

impl SpatialDeleteQueue {
    /// Erstellt eine leere Warteschlange mit gegebener Korridor-Halbbreite.
    pub fn new(corridor_radius: f32) -> Self {
        Self {
            objects: HashMap::new(),
            index: SpatialIndex::empty(),
            corridor_radius,
            pending: HashSet::new(),
        }
    }

    /// Registriert ein löschbares Szenen-Objekt und baut den Index neu auf.
    pub fn insert_object(&mut self, object_id: u64, position: Vec3) {
        self.objects.insert(object_id, position);
        self.index = SpatialIndex::from_objects(&self.objects);
    }

    /// Anzahl der aktuell registrierten Objekte.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// `true` wenn das Objekt (noch) registriert ist.
    pub fn contains(&self, object_id: u64) -> bool {
        self.objects.contains_key(&object_id)
    }
}

impl DeleteCollaborator for SpatialDeleteQueue {
    fn process_segment(&mut self, start: Vec3, end: Vec3) {
        // KD-Tree-Vorfilter: umschließende Kugel um das Segment,
        // danach exakte Abstandsprüfung gegen das Segment.
        let mid = (start + end) / 2.0;
        let radius = start.distance(end) / 2.0 + self.corridor_radius;
        for hit in self.index.within_radius(mid, radius) {
            if self.pending.contains(&hit.object_id) {
                continue;
            }
            let Some(position) = self.index.position(hit.object_id) else {
                continue;
            };
            if point_segment_distance(position, start, end) <= self.corridor_radius {
                log::debug!("Lösch-Kandidat {} erfasst", hit.object_id);
                self.pending.insert(hit.object_id);
            }
        }
    }

    fn finalize_area(&mut self) -> usize {
        let deleted = self.pending.len();
        for object_id in self.pending.drain() {
            self.objects.remove(&object_id);
        }
        self.index = SpatialIndex::from_objects(&self.objects);
        log::info!("Lösch-Bereich abgeschlossen: {} Objekte entfernt", deleted);
        deleted
    }
}
