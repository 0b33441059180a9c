use billfold_store::BillStore;

use crate::navigation::Route;
use crate::presentation::view_models::{BillsViewModel, ReceiptModalViewModel};
use crate::presentation::present_bills;

/// Bill list controller: fetches, orders, and exposes the page view model,
/// and wires the new-bill and preview actions.
pub struct Bills<S: BillStore> {
    store: S,
}

impl<S: BillStore> Bills<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch and present the list. A rejected fetch becomes the error state;
    /// its message text is rendered verbatim.
    pub async fn activate(&self) -> BillsViewModel {
        match self.store.list().await {
            Ok(bills) => BillsViewModel::from_rows(present_bills(bills)),
            Err(err) => BillsViewModel::from_error(err.to_string()),
        }
    }

    /// Synchronous: replaces the current view with the new-bill form.
    pub fn handle_click_new_bill(&self) -> Route {
        Route::NewBill
    }

    /// Open the receipt modal for a row's attachment. Rows without one never
    /// expose the control, so a null URL here is a defensive no-op.
    pub fn handle_click_icon_eye(&self, file_url: Option<&str>) -> Option<ReceiptModalViewModel> {
        let url = file_url?;
        Some(ReceiptModalViewModel {
            title: "Justificatif".to_string(),
            file_url: url.to_string(),
        })
    }
}
