//! Market data aggregate: bars, snapshots, value objects and the gateway port.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
