use billfold_types::{Bill, format_amount, format_date};

use super::view_models::BillRowViewModel;

/// Order bills most-recent-first and derive their display fields.
///
/// `YYYY-MM-DD` compares lexicographically in date order; the sort is stable,
/// so equal dates keep their fetch order.
pub fn present_bills(mut bills: Vec<Bill>) -> Vec<BillRowViewModel> {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
    bills.into_iter().map(build_row).collect()
}

fn build_row(bill: Bill) -> BillRowViewModel {
    // A record with a corrupt date still renders, showing the raw value.
    let date_display = format_date(&bill.date).unwrap_or_else(|_| bill.date.clone());

    BillRowViewModel {
        id: bill.id,
        bill_type: bill.bill_type,
        name: bill.name,
        date_raw: bill.date,
        date_display,
        amount_display: format_amount(bill.amount),
        status_label: bill.status.label().to_string(),
        file_url: bill.file_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billfold_types::BillStatus;

    fn bill(id: &str, date: &str) -> Bill {
        Bill {
            id: id.to_string(),
            email: "a@a".to_string(),
            bill_type: "Transports".to_string(),
            name: format!("bill {}", id),
            date: date.to_string(),
            amount: 100.0,
            vat: 20.0,
            pct: 20,
            commentary: None,
            file_url: None,
            file_name: None,
            status: BillStatus::Pending,
        }
    }

    #[test]
    fn test_rows_are_ordered_most_recent_first() {
        let rows = present_bills(vec![
            bill("a", "2001-01-01"),
            bill("b", "2004-04-04"),
            bill("c", "2003-03-03"),
            bill("d", "2002-02-02"),
        ]);

        let dates: Vec<&str> = rows.iter().map(|r| r.date_raw.as_str()).collect();
        assert_eq!(dates, ["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]);
    }

    #[test]
    fn test_equal_dates_keep_fetch_order() {
        let rows = present_bills(vec![
            bill("first", "2004-04-04"),
            bill("second", "2004-04-04"),
            bill("older", "2001-01-01"),
        ]);

        assert_eq!(rows[0].id, "first");
        assert_eq!(rows[1].id, "second");
    }

    #[test]
    fn test_row_carries_display_fields() {
        let mut record = bill("a", "2004-04-04");
        record.amount = 400.0;
        record.status = BillStatus::Accepted;

        let rows = present_bills(vec![record]);
        assert_eq!(rows[0].date_display, "4 Avr. 04");
        assert_eq!(rows[0].amount_display, "400 €");
        assert_eq!(rows[0].status_label, "Accepté");
    }

    #[test]
    fn test_corrupt_date_falls_back_to_raw_value() {
        let rows = present_bills(vec![bill("a", "not-a-date")]);
        assert_eq!(rows[0].date_display, "not-a-date");
    }
}
