use anyhow::{Context, Result};
use billfold_app::Bills;
use billfold_app::views::modal;
use billfold_store::BillStore;

use crate::types::OutputFormat;

pub async fn handle<S: BillStore>(store: S, bill_id: &str, format: OutputFormat) -> Result<()> {
    let controller = Bills::new(store);
    let view = controller.activate().await;
    if let Some(message) = view.error {
        anyhow::bail!(message);
    }

    let row = view
        .rows
        .iter()
        .find(|row| row.id == bill_id)
        .with_context(|| format!("No bill matching '{}'", bill_id))?;

    match controller.handle_click_icon_eye(row.file_url.as_deref()) {
        Some(modal_view) => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&modal_view)?),
            OutputFormat::Html => println!("{}", modal::render(&modal_view)),
            OutputFormat::Plain => {
                println!("{}", modal_view.title);
                println!("  {}", modal_view.file_url);
            }
        },
        None => println!("Cette note de frais n'a pas de justificatif."),
    }

    Ok(())
}
