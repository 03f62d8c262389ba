use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    pub id: i64,
    pub code: String,
    /// Percentage taken off the purchase amount.
    pub discount: u32,
    pub used: bool,
}

/// Result of one attempt to apply a voucher to a purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyOutcome {
    pub amount: f64,
    pub discount: u32,
    pub final_amount: f64,
    pub applied: bool,
}

impl ApplyOutcome {
    pub fn not_applied(amount: f64, discount: u32) -> Self {
        Self {
            amount,
            discount,
            final_amount: amount,
            applied: false,
        }
    }

    pub fn applied(amount: f64, discount: u32) -> Self {
        Self {
            amount,
            discount,
            final_amount: discounted_amount(amount, discount),
            applied: true,
        }
    }
}

/// `amount * (1 - discount / 100)`, multiplied before dividing so whole
/// amounts with whole percentages stay exact.
pub fn discounted_amount(amount: f64, discount: u32) -> f64 {
    let kept = 100.0 - f64::from(discount);
    amount * kept / 100.0
}
