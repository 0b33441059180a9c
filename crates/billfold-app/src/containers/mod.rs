mod bills;
mod new_bill;

pub use bills::Bills;
pub use new_bill::{BillForm, FileSelection, NewBill, SubmitOutcome};
