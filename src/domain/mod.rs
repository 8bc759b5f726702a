//! Domain entities and value objects, free of storage and transport concerns.

pub mod category;
pub mod types;
