use billfold_store::{BillStore, CreateBill, Error, Result, UpdateBill};
use billfold_types::{Bill, BillStatus};

/// Programmable in-memory double of the store capability.
///
/// Resolves with seeded bills by default; any operation can be switched to
/// reject with a chosen message instead.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    bills: Vec<Bill>,
    list_error: Option<String>,
    create_error: Option<String>,
    update_error: Option<String>,
}

impl MockStore {
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills,
            ..Default::default()
        }
    }

    pub fn rejecting_list(message: &str) -> Self {
        Self {
            list_error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn rejecting_create(message: &str) -> Self {
        Self {
            create_error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn rejecting_update(message: &str) -> Self {
        Self {
            update_error: Some(message.to_string()),
            ..Default::default()
        }
    }
}

impl BillStore for MockStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        match &self.list_error {
            Some(message) => Err(Error::Remote(message.clone())),
            None => Ok(self.bills.clone()),
        }
    }

    async fn create(&self, payload: CreateBill) -> Result<Bill> {
        if let Some(message) = &self.create_error {
            return Err(Error::Remote(message.clone()));
        }

        let (file_url, file_name) = match payload.attachment {
            Some(upload) => (
                Some(format!("https://storage.test.tld/{}", upload.file_name)),
                Some(upload.file_name),
            ),
            None => (None, None),
        };

        Ok(Bill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
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
        })
    }

    async fn update(&self, payload: UpdateBill) -> Result<Bill> {
        match &self.update_error {
            Some(message) => Err(Error::Remote(message.clone())),
            None => Ok(payload.data.into_bill(payload.selector)),
        }
    }
}
