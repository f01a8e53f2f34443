use crate::layers::marker::{Marker, MarkerId};

/// Markers in insertion order. Position in the list is the 1-based
/// "Marker N" number shown to the user, so removal shifts later numbers down.
#[derive(Debug, Clone, Default)]
pub struct MarkerCollection {
    markers: Vec<Marker>,
}

impl MarkerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Removes the entry with `id`. Unknown ids leave the collection untouched.
    pub fn remove(&mut self, id: MarkerId) -> Option<Marker> {
        let index = self.markers.iter().position(|m| m.id() == id)?;
        Some(self.markers.remove(index))
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Marker> {
        self.markers.iter_mut()
    }

    pub fn ids(&self) -> Vec<MarkerId> {
        self.markers.iter().map(Marker::id).collect()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }
}

impl<'a> IntoIterator for &'a MarkerCollection {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
