use crate::adapters::voucher_set::VoucherSet;
use crate::domain::model::Voucher;
use crate::domain::ports::VoucherRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Keeps the whole voucher set in a single JSON document on disk.
///
/// Every operation reads the file, and mutations write it back while holding
/// the in-process lock. A missing file is an empty store.
#[derive(Debug)]
pub struct JsonFileVoucherRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileVoucherRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn load(&self) -> Result<VoucherSet> {
        if !self.path.exists() {
            return Ok(VoucherSet::default());
        }

        let data = fs::read(&self.path)?;
        let set = serde_json::from_slice(&data)?;
        Ok(set)
    }

    fn save(&self, set: &VoucherSet) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Readers see either the old document or the new one, never a torn write.
        let tmp_path = self.tmp_path();
        let data = serde_json::to_vec_pretty(set)?;
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(
            "Saved {} vouchers to {}",
            set.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl VoucherRepository for JsonFileVoucherRepository {
    async fn get_voucher_by_code(&self, code: &str) -> Result<Option<Voucher>> {
        let _guard = self.lock.lock().await;
        let set = self.load()?;
        Ok(set.get(code).cloned())
    }

    async fn create_voucher(&self, code: &str, discount: u32) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut set = self.load()?;
        set.insert(code, discount)?;
        self.save(&set)
    }

    async fn use_voucher(&self, code: &str) -> Result<Voucher> {
        let _guard = self.lock.lock().await;
        let mut set = self.load()?;
        let voucher = set.mark_used(code)?;
        self.save(&set)?;
        Ok(voucher)
    }
}
