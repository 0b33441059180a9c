pub mod bills_ui;
pub mod modal;
pub mod new_bill_ui;

/// Minimal HTML attribute/text escaping for interpolated record fields.
pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page chrome shared by the employee pages: the vertical icon rail with the
/// active page highlighted.
pub(crate) fn vertical_layout(active: ActiveIcon, content: &str) -> String {
    let (window_class, mail_class) = match active {
        ActiveIcon::Window => ("icon active-icon", "icon"),
        ActiveIcon::Mail => ("icon", "icon active-icon"),
    };
    format!(
        r#"<div class="layout">
  <nav class="vertical-navbar">
    <div data-testid="icon-window" class="{window_class}"></div>
    <div data-testid="icon-mail" class="{mail_class}"></div>
  </nav>
  <div class="content">
{content}
  </div>
</div>"#
    )
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ActiveIcon {
    Window,
    Mail,
}
