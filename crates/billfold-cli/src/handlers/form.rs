use anyhow::Result;
use billfold_app::presentation::view_models::NewBillViewModel;
use billfold_app::views::new_bill_ui;

use crate::types::OutputFormat;

/// The new-bill navigation target: no store call, just the form page.
pub fn handle(format: OutputFormat) -> Result<()> {
    let view = NewBillViewModel::default();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        _ => println!("{}", new_bill_ui::render(&view)),
    }
    Ok(())
}
