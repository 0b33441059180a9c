mod error;
mod fs;
mod store;

pub use error::{Error, Result};
pub use fs::{BillOps, JsonStore};
pub use store::{BillDraft, BillStore, CreateBill, FileUpload, UpdateBill};
