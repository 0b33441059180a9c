use std::path::Path;

use billfold_store::{BillDraft, BillStore, CreateBill, FileUpload, UpdateBill};
use billfold_types::BillStatus;

use crate::navigation::Route;
use crate::session::Session;

/// Receipt formats the form accepts.
const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Outcome of a file-selection event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    Accepted { file_name: String },
    /// Unsupported format: the input is cleared and the user stays editing.
    /// No banner, no panic.
    Rejected,
}

/// Outcome of a submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    NavigatedAway(Route),
    EditingWithError(String),
}

/// Form fields as read at submit time. Required fields are non-optional by
/// construction: emptiness is blocked by the surface (HTML `required`, clap
/// `required`) before this layer runs, and it does not re-validate.
#[derive(Debug, Clone)]
pub struct BillForm {
    pub expense_type: String,
    pub expense_name: Option<String>,
    pub date: String,
    pub amount: f64,
    pub vat: f64,
    pub pct: u8,
    pub commentary: Option<String>,
}

/// New-bill form controller.
///
/// `Editing -> Submitting -> { NavigatedAway | EditingWithError }`: file
/// selection keeps the controller in `Editing`; only `handle_submit` leaves
/// it, and only on a settled store call.
pub struct NewBill<S: BillStore> {
    store: S,
    session: Session,
    attachment: Option<FileUpload>,
    file_url: Option<String>,
    file_name: Option<String>,
}

impl<S: BillStore> NewBill<S> {
    pub fn new(store: S, session: Session) -> Self {
        Self {
            store,
            session,
            attachment: None,
            file_url: None,
            file_name: None,
        }
    }

    /// Receipt location, null until an upload succeeds.
    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    /// Selected file name, mirroring what the file input displays.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Validate a selected file by extension (case-insensitive). Accepted
    /// files are retained for submission; rejected ones clear the selection.
    pub fn handle_change_file(&mut self, file_name: &str, bytes: Vec<u8>) -> FileSelection {
        if !has_accepted_extension(file_name) {
            self.attachment = None;
            self.file_name = None;
            return FileSelection::Rejected;
        }

        self.file_name = Some(file_name.to_string());
        self.attachment = Some(FileUpload {
            file_name: file_name.to_string(),
            bytes,
        });
        FileSelection::Accepted {
            file_name: file_name.to_string(),
        }
    }

    /// Submit the populated form: create the record (uploading any retained
    /// attachment), then write the full field set. Resolution navigates to
    /// the bill list; rejection surfaces the message and stays on the form.
    pub async fn handle_submit(&mut self, form: BillForm) -> SubmitOutcome {
        let payload = CreateBill {
            email: self.session.email().to_string(),
            attachment: self.attachment.clone(),
        };

        let created = match self.store.create(payload).await {
            Ok(bill) => bill,
            Err(err) => return SubmitOutcome::EditingWithError(err.to_string()),
        };
        self.file_url = created.file_url.clone();
        self.file_name = created.file_name.clone();

        let update = UpdateBill {
            selector: created.id,
            data: BillDraft {
                email: self.session.email().to_string(),
                bill_type: form.expense_type,
                name: form.expense_name.unwrap_or_default(),
                date: form.date,
                amount: form.amount,
                vat: form.vat,
                pct: form.pct,
                commentary: form.commentary,
                file_url: created.file_url,
                file_name: created.file_name,
                status: BillStatus::Pending,
            },
        };

        match self.store.update(update).await {
            Ok(_) => SubmitOutcome::NavigatedAway(Route::Bills),
            Err(err) => SubmitOutcome::EditingWithError(err.to_string()),
        }
    }
}

fn has_accepted_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
