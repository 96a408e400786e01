//! Repository implementations for database operations.

pub mod eta;
pub mod group;
pub mod product;
pub mod signup;

pub use eta::EtaRepository;
pub use group::{GroupOpError, GroupRepository};
pub use product::ProductRepository;
pub use signup::SignupRepository;
