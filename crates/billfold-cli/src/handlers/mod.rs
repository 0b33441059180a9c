pub mod form;
pub mod init;
pub mod list;
pub mod new_bill;
pub mod preview;
