// NOTE: billfold Architecture Rationale
//
// Why view models between controllers and views?
// - Controllers validate/derive display fields once; views only interpolate
// - The pure build step is testable without any rendering surface
// - Plain, JSON and HTML output all read the same view model
//
// Why generic controllers (not a trait object store)?
// - The store seam is a capability trait with async methods
// - Static dispatch keeps the double injectable in tests without
//   monkey-patching and without boxing futures
//
// Why does ordering live in the controller, not the view?
// - The view renders rows in the order given, so markup assertions and
//   ordering assertions stay independent
// - `YYYY-MM-DD` strings compare lexicographically in date order; a stable
//   sort keeps fetch order on equal dates

pub mod containers;
pub mod navigation;
pub mod presentation;
pub mod session;
pub mod views;

pub use containers::{BillForm, Bills, FileSelection, NewBill, SubmitOutcome};
pub use navigation::Route;
pub use session::Session;
