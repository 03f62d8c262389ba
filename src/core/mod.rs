pub mod voucher_service;

pub use crate::domain::model::{ApplyOutcome, Voucher};
pub use crate::domain::ports::{ConfigProvider, VoucherRepository};
pub use crate::utils::error::Result;
