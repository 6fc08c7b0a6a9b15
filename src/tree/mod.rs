//! Rooted working tree, equivalence tree, and the labeling odometer

mod builder;
mod equiv;
mod labeler;

pub use builder::{Node, ShapeVec, Tree};
pub use equiv::{EqNode, EqTree};
pub use labeler::Labelings;
