use serde::{Deserialize, Serialize};

/// Review status of an expense report. Transitions happen on the store side;
/// the client only displays the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Display label shown in the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }
}

impl Default for BillStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// One expense-report record.
///
/// Assembled by a successful form submission and mutated only by the store.
/// `file_url` and `file_name` are set together or both absent; use
/// [`Bill::with_attachment`] to keep the pair consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Opaque identifier, assigned by the store.
    pub id: String,
    /// Owner identity.
    pub email: String,
    /// Expense category (closed option list in the form UI).
    #[serde(rename = "type")]
    pub bill_type: String,
    /// Free-text description.
    pub name: String,
    /// Calendar date as `YYYY-MM-DD`. Lexicographic order on this string is
    /// date order, which the list controller relies on for sorting.
    pub date: String,
    pub amount: f64,
    pub vat: f64,
    /// Percentage, 0-100.
    pub pct: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    /// Receipt attachment location; null until an upload succeeds.
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

impl Bill {
    /// Attach a receipt reference, setting both halves of the pair.
    pub fn with_attachment(mut self, file_url: impl Into<String>, file_name: impl Into<String>) -> Self {
        self.file_url = Some(file_url.into());
        self.file_name = Some(file_name.into());
        self
    }

    pub fn has_attachment(&self) -> bool {
        self.file_url.is_some()
    }
}
