pub mod api;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use api::{fba, finances};
pub use config::{MwsConfig, Region};
pub use core::{
    ComplexList, ComplexObject, ParamKind, ParamSpec, ParamValue, Request, RequestInfo,
};
pub use utils::error::{MwsError, Result};
