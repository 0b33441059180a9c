use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use billfold_app::{BillForm, Bills, FileSelection, NewBill, Session, SubmitOutcome};
use billfold_store::BillStore;

use super::list;
use crate::types::OutputFormat;

pub async fn handle<S: BillStore + Clone>(
    store: S,
    session: Session,
    form: BillForm,
    receipt: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut controller = NewBill::new(store.clone(), session);

    if let Some(path) = receipt {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Could not read receipt file {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();

        match controller.handle_change_file(&file_name, bytes) {
            FileSelection::Accepted { file_name } => println!("Justificatif: {}", file_name),
            // In the form UI this clears the input and the user reselects;
            // a one-shot invocation has nothing to reselect, so stop here.
            FileSelection::Rejected => {
                bail!("Unsupported receipt format (accepted: jpg, jpeg, png)")
            }
        }
    }

    match controller.handle_submit(form).await {
        SubmitOutcome::NavigatedAway(route) => {
            println!("Note de frais envoyée -> {}\n", route.path());
            let list_controller = Bills::new(store);
            list::render_bills_page(&list_controller.activate().await, format)
        }
        SubmitOutcome::EditingWithError(message) => bail!(message),
    }
}
