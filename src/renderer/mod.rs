//! Rendering support
//!
//! Turns a simulation `Frame` into a triangle list a GPU frontend can upload
//! as-is. Window and device setup stay with the host.

pub mod shapes;
pub mod vertex;

pub use shapes::frame_vertices;
pub use vertex::Vertex;
