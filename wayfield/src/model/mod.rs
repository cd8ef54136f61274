pub mod compute;
pub mod congestion;
pub mod cost;
pub mod network;
pub mod pointset;
pub mod provenance;
pub mod result;
