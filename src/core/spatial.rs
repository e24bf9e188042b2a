//! Spatial-Index (KD-Tree) für schnelle Abfragen über Szenen-Objekte.

use std::collections::HashMap;

use glam::Vec3;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Objekts
    pub object_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über den Positionen löschbarer Szenen-Objekte.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 3>,
    object_ids: Vec<u64>,
    positions: HashMap<u64, Vec3>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 3]>::new()).into(),
            object_ids: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Objekt-Positionen.
    pub fn from_objects(objects: &HashMap<u64, Vec3>) -> Self {
        let mut object_ids: Vec<u64> = objects.keys().copied().collect();
        object_ids.sort_unstable();

        let entries: Vec<[f64; 3]> = object_ids
            .iter()
            .filter_map(|id| {
                objects
                    .get(id)
                    .map(|p| [p.x as f64, p.y as f64, p.z as f64])
            })
            .collect();

        let tree: KdTree<f64, 3> = (&entries).into();

        Self {
            tree,
            object_ids,
            positions: objects.clone(),
        }
    }

    /// Gibt die Anzahl indexierter Objekte zurück.
    pub fn len(&self) -> usize {
        self.object_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Objekte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.object_ids.is_empty()
    }

    /// Gibt die indexierte Position eines Objekts zurück.
    pub fn position(&self, object_id: u64) -> Option<Vec3> {
        self.positions.get(&object_id).copied()
    }

    /// Findet das nächste Objekt zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec3) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64, query.z as f64]);
        let object_id = *self.object_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            object_id,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Objekte innerhalb eines Radius um die Query-Position.
    pub fn within_radius(&self, query: Vec3, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(
                &[query.x as f64, query.y as f64, query.z as f64],
                (radius * radius) as f64,
            )
            .into_iter()
            .filter_map(|entry| {
                let object_id = *self.object_ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    object_id,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_objects() -> HashMap<u64, Vec3> {
        let mut objects = HashMap::new();
        objects.insert(1, Vec3::new(0.0, 0.0, 0.0));
        objects.insert(2, Vec3::new(5.0, 0.0, 0.0));
        objects.insert(3, Vec3::new(0.0, 0.0, 7.0));
        objects
    }

    #[test]
    fn leerer_index_liefert_keine_treffer() {
        let index = SpatialIndex::empty();
        assert!(index.is_empty());
        assert!(index.nearest(Vec3::ZERO).is_none());
        assert!(index.within_radius(Vec3::ZERO, 10.0).is_empty());
    }

    #[test]
    fn nearest_findet_das_naechste_objekt() {
        let index = SpatialIndex::from_objects(&sample_objects());
        let hit = index.nearest(Vec3::new(4.0, 0.0, 0.0)).unwrap();
        assert_eq!(hit.object_id, 2);
        assert!((hit.distance - 1.0).abs() < 1e-5);
    }

    #[test]
    fn within_radius_sortiert_nach_distanz() {
        let index = SpatialIndex::from_objects(&sample_objects());
        let hits = index.within_radius(Vec3::new(1.0, 0.0, 0.0), 10.0);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].object_id, 1);
        assert_eq!(hits[1].object_id, 2);
    }

    #[test]
    fn within_radius_respektiert_den_radius() {
        let index = SpatialIndex::from_objects(&sample_objects());
        let hits = index.within_radius(Vec3::ZERO, 5.5);
        assert_eq!(hits.len(), 2);
    }
}
