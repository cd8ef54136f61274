pub mod provenance_ops;
mod routing_state;

pub use provenance_ops::way_ids_from_router_state;
pub use routing_state::{RoutingStateSource, TerminalState};
