use super::{ActiveIcon, escape, vertical_layout};
use crate::presentation::view_models::NewBillViewModel;

/// The closed category list offered by the expense-type select.
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Paint the new-bill form page. Required fields carry the `required`
/// attribute: emptiness is blocked by the surface before any submit handler
/// runs.
pub fn render(view: &NewBillViewModel) -> String {
    let options: String = view
        .expense_types
        .iter()
        .map(|t| format!("          <option value=\"{0}\">{0}</option>\n", escape(t)))
        .collect();

    let content = format!(
        r#"    <div class="content-header">
      <div class="content-title">Envoyer une note de frais</div>
    </div>
    <form data-testid="form-new-bill">
      <label for="expense-type">Type de dépense</label>
      <select data-testid="expense-type" id="expense-type" required>
{options}      </select>
      <label for="expense-name">Nom de la dépense</label>
      <input data-testid="expense-name" id="expense-name" type="text" />
      <label for="datepicker">Date</label>
      <input data-testid="datepicker" id="datepicker" type="date" required />
      <label for="amount">Montant TTC</label>
      <input data-testid="amount" id="amount" type="number" required />
      <label for="vat">TVA</label>
      <input data-testid="vat" id="vat" type="number" />
      <label for="pct">%</label>
      <input data-testid="pct" id="pct" type="number" required />
      <label for="commentary">Commentaire</label>
      <textarea data-testid="commentary" id="commentary"></textarea>
      <label for="file">Justificatif</label>
      <input data-testid="file" id="file" type="file" required />
      <button type="submit" id="btn-send-bill">Envoyer</button>
    </form>"#
    );

    vertical_layout(ActiveIcon::Mail, &content)
}
