pub mod presenters;
pub mod view_models;

pub use presenters::present_bills;
pub use view_models::{BillRowViewModel, BillsViewModel, NewBillViewModel, ReceiptModalViewModel};
