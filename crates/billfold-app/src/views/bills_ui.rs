use super::{ActiveIcon, escape, vertical_layout};
use crate::presentation::view_models::{BillRowViewModel, BillsViewModel};

/// Paint the bill list page.
///
/// The heading and the new-bill control render in every state; an error
/// replaces the table entirely.
pub fn render(view: &BillsViewModel) -> String {
    let body = match &view.error {
        Some(message) => error_banner(message),
        None => table(&view.rows),
    };

    let content = format!(
        r#"    <div class="content-header">
      <div class="content-title">Mes notes de frais</div>
      <button type="button" data-testid="btn-new-bill">Nouvelle note de frais</button>
    </div>
{body}"#
    );

    vertical_layout(ActiveIcon::Window, &content)
}

fn error_banner(message: &str) -> String {
    format!(
        r#"    <div data-testid="error-message" class="error-message">{}</div>"#,
        escape(message)
    )
}

fn table(rows: &[BillRowViewModel]) -> String {
    let body: String = rows.iter().map(render_row).collect();
    format!(
        r#"    <table id="bills-table">
      <thead>
        <tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr>
      </thead>
      <tbody data-testid="tbody">
{body}      </tbody>
    </table>"#
    )
}

/// One display row. The preview affordance renders only for bills that carry
/// a receipt; wiring its click behavior is the controller's job.
fn render_row(row: &BillRowViewModel) -> String {
    let actions = match &row.file_url {
        Some(url) => format!(
            r#"<div data-testid="icon-eye" class="icon-actions" data-bill-url="{}"></div>"#,
            escape(url)
        ),
        None => String::new(),
    };

    format!(
        r#"        <tr data-testid="bill-row">
          <td>{}</td>
          <td>{}</td>
          <td data-testid="bill-date">{}</td>
          <td>{}</td>
          <td><span class="status-badge">{}</span></td>
          <td>{}</td>
        </tr>
"#,
        escape(&row.bill_type),
        escape(&row.name),
        escape(&row.date_display),
        escape(&row.amount_display),
        escape(&row.status_label),
        actions,
    )
}
