// Adapters layer: concrete voucher stores behind the domain port.

pub mod json_file;
pub mod memory;
pub mod voucher_set;

pub use json_file::JsonFileVoucherRepository;
pub use memory::InMemoryVoucherRepository;
