//! Protocol module containing the request body types and the endpoint table.

pub mod endpoints;
pub mod messages;

pub use endpoints::*;
pub use messages::*;
