mod edge_id;
mod edge_store;
mod network_error;
mod street_class;
pub mod vertex_store;
mod way_id;

pub use edge_id::EdgeId;
pub use edge_store::{Edge, EdgeStore};
pub use network_error::NetworkError;
pub use street_class::StreetClass;
pub use vertex_store::{VertexEntry, VertexFlag, VertexStore, FIXED_FACTOR};
pub use way_id::WayId;
