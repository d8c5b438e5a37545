/// Primitive geometric shapes
pub mod primitives;
