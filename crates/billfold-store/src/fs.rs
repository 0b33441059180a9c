use std::path::PathBuf;

use billfold_types::{Bill, BillStatus};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::store::{BillStore, CreateBill, UpdateBill};

/// File-backed store rooted at the billfold data directory.
///
/// Bills persist as `bills.json`; accepted receipt uploads are copied under
/// `receipts/` and referenced by `file_url`.
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Resource accessor for the bills collection.
    pub fn bills(&self) -> BillOps {
        BillOps {
            data_dir: self.data_dir.clone(),
        }
    }
}

/// Operations handle over the persisted bills collection.
#[derive(Clone)]
pub struct BillOps {
    data_dir: PathBuf,
}

impl BillOps {
    fn bills_path(&self) -> PathBuf {
        self.data_dir.join("bills.json")
    }

    async fn read_all(&self) -> Result<Vec<Bill>> {
        let path = self.bills_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = tokio::fs::read_to_string(&path).await?;
        let bills: Vec<Bill> = serde_json::from_str(&content)?;
        Ok(bills)
    }

    async fn write_all(&self, bills: &[Bill]) -> Result<()> {
        let content = serde_json::to_string_pretty(bills)?;
        tokio::fs::write(self.bills_path(), content).await?;
        Ok(())
    }
}

impl BillStore for BillOps {
    async fn list(&self) -> Result<Vec<Bill>> {
        self.read_all().await
    }

    async fn create(&self, payload: CreateBill) -> Result<Bill> {
        let id = Uuid::new_v4().to_string();

        let (file_url, file_name) = match payload.attachment {
            Some(upload) => {
                let receipts = self.data_dir.join("receipts");
                tokio::fs::create_dir_all(&receipts).await?;
                let dest = receipts.join(format!("{}-{}", id, upload.file_name));
                tokio::fs::write(&dest, &upload.bytes).await?;
                (
                    Some(dest.to_string_lossy().into_owned()),
                    Some(upload.file_name),
                )
            }
            None => (None, None),
        };

        // Stub record: the expense fields arrive with the follow-up update.
        let bill = Bill {
            id,
            email: payload.email,
            bill_type: String::new(),
            name: String::new(),
            date: String::new(),
            amount: 0.0,
            vat: 0.0,
            pct: 0,
            commentary: None,
            file_url,
            file_name,
            status: BillStatus::Pending,
        };

        let mut bills = self.read_all().await?;
        bills.push(bill.clone());
        self.write_all(&bills).await?;
        Ok(bill)
    }

    async fn update(&self, payload: UpdateBill) -> Result<Bill> {
        let mut bills = self.read_all().await?;
        let slot = bills
            .iter_mut()
            .find(|bill| bill.id == payload.selector)
            .ok_or_else(|| Error::NotFound(payload.selector.clone()))?;

        *slot = payload.data.into_bill(payload.selector);
        let updated = slot.clone();
        self.write_all(&bills).await?;
        Ok(updated)
    }
}
