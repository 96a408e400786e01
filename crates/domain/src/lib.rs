//! Domain layer for the shuttle signup backend.
//!
//! This crate contains:
//! - Domain models (Signup, BusGroup, EtaRecord, Product)
//! - Request/response payloads shared by the API layer

pub mod models;
