pub mod request;
pub mod schema;
pub mod value;

pub use request::{OperationDescription, Request, RequestInfo};
pub use schema::{ParamKind, ParamSpec};
pub use value::{ComplexList, ComplexObject, ComplexValue, ParamValue};

pub use crate::utils::error::Result;
