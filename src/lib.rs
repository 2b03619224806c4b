// Shared infrastructure
pub mod config;
pub mod error;

// Domain layer (media classification and provider clients)
pub mod media;
pub mod push;
pub mod storage;

// Application layer
pub mod api;
pub mod server;
