use crate::adapters::voucher_set::VoucherSet;
use crate::domain::model::Voucher;
use crate::domain::ports::VoucherRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-local repository. Clones share the same vouchers.
#[derive(Clone, Default)]
pub struct InMemoryVoucherRepository {
    set: Arc<Mutex<VoucherSet>>,
}

impl InMemoryVoucherRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.set.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.set.lock().await.is_empty()
    }
}

#[async_trait]
impl VoucherRepository for InMemoryVoucherRepository {
    async fn get_voucher_by_code(&self, code: &str) -> Result<Option<Voucher>> {
        let set = self.set.lock().await;
        Ok(set.get(code).cloned())
    }

    async fn create_voucher(&self, code: &str, discount: u32) -> Result<()> {
        let mut set = self.set.lock().await;
        set.insert(code, discount)?;
        Ok(())
    }

    async fn use_voucher(&self, code: &str) -> Result<Voucher> {
        let mut set = self.set.lock().await;
        set.mark_used(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryVoucherRepository::new();
        let other = repo.clone();
        assert!(other.is_empty().await);

        repo.create_voucher("SHARED", 20).await.unwrap();

        let found = other.get_voucher_by_code("SHARED").await.unwrap().unwrap();
        assert_eq!(found.discount, 20);
        assert_eq!(other.len().await, 1);
        assert!(!repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_use_voucher_returns_updated_record() {
        let repo = InMemoryVoucherRepository::new();
        repo.create_voucher("ONCE", 10).await.unwrap();

        let used = repo.use_voucher("ONCE").await.unwrap();
        assert_eq!(used.id, 1);
        assert!(used.used);

        let stored = repo.get_voucher_by_code("ONCE").await.unwrap().unwrap();
        assert!(stored.used);
    }
}
