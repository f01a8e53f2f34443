pub mod collection;
pub mod marker;

pub use collection::MarkerCollection;
pub use marker::{Marker, MarkerId};
