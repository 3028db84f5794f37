pub mod common;
pub mod request;
pub mod service_structure;

pub use crate::domain::DomainError;
pub use request::{Port, ScaffoldRequest, ServiceName};
pub use service_structure::ServiceStructure;
