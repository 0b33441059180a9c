mod bill;
mod user;

pub use bill::{Bill, BillStatus};
pub use user::{User, UserRole};
