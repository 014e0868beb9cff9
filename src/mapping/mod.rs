// signature / argument bag / chain config documents
pub mod config;
pub mod loader;
