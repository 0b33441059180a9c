use serde::Serialize;

/// One display row of the bill list.
#[derive(Debug, Clone, Serialize)]
pub struct BillRowViewModel {
    pub id: String,
    pub bill_type: String,
    pub name: String,
    /// Stored `YYYY-MM-DD` form; rows are ordered on this value.
    pub date_raw: String,
    /// Locale-rendered form shown to the user.
    pub date_display: String,
    pub amount_display: String,
    pub status_label: String,
    /// Receipt location; rows without one get no preview affordance.
    pub file_url: Option<String>,
}

/// The bill list page. Error takes precedence over rows.
#[derive(Debug, Clone, Serialize)]
pub struct BillsViewModel {
    pub rows: Vec<BillRowViewModel>,
    pub error: Option<String>,
}

impl BillsViewModel {
    pub fn from_rows(rows: Vec<BillRowViewModel>) -> Self {
        Self { rows, error: None }
    }

    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// The receipt-preview modal surface.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptModalViewModel {
    pub title: String,
    pub file_url: String,
}

/// The new-bill form page.
#[derive(Debug, Clone, Serialize)]
pub struct NewBillViewModel {
    pub expense_types: Vec<&'static str>,
}

impl Default for NewBillViewModel {
    fn default() -> Self {
        Self {
            expense_types: crate::views::new_bill_ui::EXPENSE_TYPES.to_vec(),
        }
    }
}
