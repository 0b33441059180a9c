use billfold_app::presentation::view_models::BillsViewModel;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Console rendering of the bill list page.
pub fn print_bills_table(view: &BillsViewModel) {
    let use_color = std::io::stdout().is_terminal();

    if let Some(message) = &view.error {
        if use_color {
            println!("{}", message.red());
        } else {
            println!("{}", message);
        }
        return;
    }

    println!("Mes notes de frais\n");

    if view.rows.is_empty() {
        println!("Aucune note de frais.");
        return;
    }

    println!(
        "{:<22} {:<24} {:<32} {:<12} {:<10} STATUT",
        "ID", "TYPE", "NOM", "DATE", "MONTANT"
    );
    println!("{}", "-".repeat(110));

    for row in &view.rows {
        println!(
            "{:<22} {:<24} {:<32} {:<12} {:<10} {}",
            truncate(&row.id, 20),
            truncate(&row.bill_type, 22),
            truncate(&row.name, 30),
            row.date_display,
            row.amount_display,
            status_cell(&row.status_label, use_color),
        );
    }
}

fn status_cell(label: &str, use_color: bool) -> String {
    if !use_color {
        return label.to_string();
    }
    match label {
        "En attente" => label.yellow().to_string(),
        "Accepté" => label.green().to_string(),
        "Refusé" => label.red().to_string(),
        _ => label.to_string(),
    }
}

/// Truncate respecting UTF-8 character boundaries.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate("encore", 20), "encore");
    }

    #[test]
    fn test_truncate_respects_multibyte_chars() {
        assert_eq!(truncate("Hôtel et logement éé", 10), "Hôtel e...");
    }

    #[test]
    fn test_status_cell_plain_without_terminal() {
        assert_eq!(status_cell("En attente", false), "En attente");
    }
}
