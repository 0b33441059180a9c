use anyhow::Result;
use billfold_app::Bills;
use billfold_app::presentation::view_models::BillsViewModel;
use billfold_app::views::bills_ui;
use billfold_store::BillStore;

use crate::output;
use crate::types::OutputFormat;

pub async fn handle<S: BillStore>(store: S, format: OutputFormat) -> Result<()> {
    let controller = Bills::new(store);
    let view = controller.activate().await;
    render_bills_page(&view, format)
}

/// Paint the bill list view model in the selected format.
pub(crate) fn render_bills_page(view: &BillsViewModel, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
        OutputFormat::Html => println!("{}", bills_ui::render(view)),
        OutputFormat::Plain => output::print_bills_table(view),
    }
    Ok(())
}
