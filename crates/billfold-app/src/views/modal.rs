use super::escape;
use crate::presentation::view_models::ReceiptModalViewModel;

/// Paint the receipt-preview modal: title bar, the receipt image, and a
/// dismiss control.
pub fn render(view: &ReceiptModalViewModel) -> String {
    format!(
        r#"<div data-testid="modal" class="modal">
  <div class="modal-header">
    <div class="modal-title">{title}</div>
    <button type="button" data-testid="modal-close" class="close">&times;</button>
  </div>
  <div class="modal-body">
    <img src="{url}" alt="{title}" />
  </div>
</div>"#,
        title = escape(&view.title),
        url = escape(&view.file_url),
    )
}
