pub mod client;
pub mod gateway;
pub mod images;
pub mod models;

pub use client::{ContentClient, ContentError};
pub use gateway::{ContentGateway, CosmicGateway, EntityKind, GatewayError, ObjectQuery};
