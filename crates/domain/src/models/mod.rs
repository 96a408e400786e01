//! Domain models for the shuttle signup backend.

pub mod eta;
pub mod group;
pub mod product;
pub mod signup;

pub use eta::EtaRecord;
pub use group::BusGroup;
pub use product::Product;
pub use signup::Signup;
