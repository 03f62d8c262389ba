use crate::domain::model::{ApplyOutcome, Voucher};
use crate::domain::ports::VoucherRepository;
use crate::utils::error::{Result, VoucherError};
use crate::utils::validation::{validate_code, validate_discount, validate_purchase_amount};

/// Smallest purchase amount a voucher can be applied to.
pub const DEFAULT_MIN_AMOUNT: f64 = 100.0;

pub struct VoucherService<R: VoucherRepository> {
    repository: R,
    min_amount: f64,
}

impl<R: VoucherRepository> VoucherService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_min_amount(repository, DEFAULT_MIN_AMOUNT)
    }

    pub fn with_min_amount(repository: R, min_amount: f64) -> Self {
        Self {
            repository,
            min_amount,
        }
    }

    pub fn min_amount(&self) -> f64 {
        self.min_amount
    }

    pub async fn create_voucher(&self, code: &str, discount: u32) -> Result<()> {
        validate_code(code)?;
        validate_discount(discount)?;

        if self.repository.get_voucher_by_code(code).await?.is_some() {
            tracing::warn!("Rejected duplicate voucher code '{}'", code);
            return Err(VoucherError::already_exists());
        }

        self.repository.create_voucher(code, discount).await?;
        tracing::info!("Created voucher '{}' with {}% discount", code, discount);
        Ok(())
    }

    pub async fn apply_voucher(&self, code: &str, amount: f64) -> Result<ApplyOutcome> {
        validate_purchase_amount(amount)?;

        let voucher = self.find_voucher(code).await?;

        if amount < self.min_amount {
            tracing::info!(
                "Voucher '{}' not applied: amount {} below minimum {}",
                code,
                amount,
                self.min_amount
            );
            return Ok(ApplyOutcome::not_applied(amount, voucher.discount));
        }

        // used only ever goes false -> true
        if voucher.used {
            tracing::warn!("Voucher '{}' was already used", code);
            return Ok(ApplyOutcome::not_applied(amount, voucher.discount));
        }

        let used = self.repository.use_voucher(code).await?;
        let outcome = ApplyOutcome::applied(amount, voucher.discount);
        tracing::info!(
            "Applied voucher '{}' (id {}): {} -> {}",
            used.code,
            used.id,
            outcome.amount,
            outcome.final_amount
        );
        Ok(outcome)
    }

    pub async fn get_voucher(&self, code: &str) -> Result<Voucher> {
        self.find_voucher(code).await
    }

    async fn find_voucher(&self, code: &str) -> Result<Voucher> {
        tracing::debug!("Looking up voucher '{}'", code);
        self.repository
            .get_voucher_by_code(code)
            .await?
            .ok_or_else(VoucherError::does_not_exist)
    }
}
