//! Entity definitions (database row mappings).

pub mod eta;
pub mod group;
pub mod product;
pub mod signup;

pub use eta::EtaEntity;
pub use group::BusGroupEntity;
pub use product::ProductEntity;
pub use signup::SignupEntity;
