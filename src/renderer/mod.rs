//! Data-driven rendering
//!
//! Every entity carries a `Shape` descriptor. One routine turns the live
//! entities into a flat triangle list; GPU setup is left to the host.

pub mod shapes;
pub mod vertex;

pub use shapes::draw_list;
pub use vertex::Vertex;
