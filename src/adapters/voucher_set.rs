use crate::domain::model::Voucher;
use crate::utils::error::{Result, VoucherError};
use serde::{Deserialize, Serialize};

/// Voucher records plus the id counter, as held by the bundled stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherSet {
    pub next_id: i64,
    pub vouchers: Vec<Voucher>,
}

impl Default for VoucherSet {
    fn default() -> Self {
        Self {
            next_id: 1,
            vouchers: Vec::new(),
        }
    }
}

impl VoucherSet {
    pub fn get(&self, code: &str) -> Option<&Voucher> {
        self.vouchers.iter().find(|v| v.code == code)
    }

    pub fn insert(&mut self, code: &str, discount: u32) -> Result<Voucher> {
        if self.get(code).is_some() {
            return Err(VoucherError::already_exists());
        }

        let voucher = Voucher {
            id: self.next_id,
            code: code.to_string(),
            discount,
            used: false,
        };
        self.next_id += 1;
        self.vouchers.push(voucher.clone());
        Ok(voucher)
    }

    pub fn mark_used(&mut self, code: &str) -> Result<Voucher> {
        let voucher = self
            .vouchers
            .iter_mut()
            .find(|v| v.code == code)
            .ok_or_else(|| VoucherError::NotFound {
                code: code.to_string(),
            })?;
        voucher.used = true;
        Ok(voucher.clone())
    }

    pub fn len(&self) -> usize {
        self.vouchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vouchers.is_empty()
    }
}
