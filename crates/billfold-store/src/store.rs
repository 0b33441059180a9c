use billfold_types::{Bill, BillStatus};

use crate::error::Result;

/// A receipt file selected for upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Payload for `create`: owner identity plus the optional attachment (the
/// multipart-upload analogue). The created record is a stub completed by the
/// follow-up `update`.
#[derive(Debug, Clone)]
pub struct CreateBill {
    pub email: String,
    pub attachment: Option<FileUpload>,
}

/// The full field set written by `update`.
#[derive(Debug, Clone)]
pub struct BillDraft {
    pub email: String,
    pub bill_type: String,
    pub name: String,
    pub date: String,
    pub amount: f64,
    pub vat: f64,
    pub pct: u8,
    pub commentary: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// Payload for `update`: the store-assigned id plus the draft to write.
#[derive(Debug, Clone)]
pub struct UpdateBill {
    pub selector: String,
    pub data: BillDraft,
}

/// Capability interface over the bills resource.
///
/// The single I/O boundary of the client: every method suspends until the
/// store settles, and failures surface as [`crate::Error`] values whose
/// message text is what the user sees. Concrete implementations are the
/// file-backed [`crate::JsonStore`] handle and the in-memory double in
/// `billfold-testing`.
pub trait BillStore {
    async fn list(&self) -> Result<Vec<Bill>>;
    async fn create(&self, payload: CreateBill) -> Result<Bill>;
    async fn update(&self, payload: UpdateBill) -> Result<Bill>;
}

impl BillDraft {
    /// Materialize the draft as a record under the given id.
    pub fn into_bill(self, id: String) -> Bill {
        Bill {
            id,
            email: self.email,
            bill_type: self.bill_type,
            name: self.name,
            date: self.date,
            amount: self.amount,
            vat: self.vat,
            pct: self.pct,
            commentary: self.commentary,
            file_url: self.file_url,
            file_name: self.file_name,
            status: self.status,
        }
    }
}
