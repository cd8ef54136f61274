mod traversal_error;
mod traversal_ops;

pub use traversal_error::TraversalError;
pub use traversal_ops::{
    crossing_delay_seconds, edge_traversal_seconds, path_traversal_seconds, MIN_TRAVERSAL_SECONDS,
};
