pub mod operation;
pub mod request;

pub use operation::{HttpMethod, OperationDescriptor};
pub use request::{GenerationRequest, GenerationResponse};
