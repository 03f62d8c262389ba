pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{InMemoryVoucherRepository, JsonFileVoucherRepository};
pub use config::ServiceConfig;
pub use crate::core::voucher_service::VoucherService;
pub use domain::model::{ApplyOutcome, Voucher};
pub use domain::ports::VoucherRepository;
pub use utils::error::{ErrorBody, ErrorKind, Result, VoucherError};
