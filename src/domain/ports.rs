use crate::domain::model::Voucher;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence accessor consumed by the voucher service.
#[async_trait]
pub trait VoucherRepository: Send + Sync {
    async fn get_voucher_by_code(&self, code: &str) -> Result<Option<Voucher>>;

    /// Inserts a fresh, unused voucher. The store assigns the id.
    async fn create_voucher(&self, code: &str, discount: u32) -> Result<()>;

    /// Marks the voucher as used and returns the updated record.
    async fn use_voucher(&self, code: &str) -> Result<Voucher>;
}

pub trait ConfigProvider: Send + Sync {
    fn min_amount(&self) -> f64;
    fn store_path(&self) -> &str;
}
