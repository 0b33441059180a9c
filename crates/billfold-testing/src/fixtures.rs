use billfold_types::{Bill, BillStatus};

/// Build one fixture bill. Attachment fields stay null; chain
/// [`Bill::with_attachment`] where a receipt is needed.
pub fn bill(id: &str, name: &str, date: &str, amount: f64, status: BillStatus) -> Bill {
    Bill {
        id: id.to_string(),
        email: "a@a".to_string(),
        bill_type: "Hôtel et logement".to_string(),
        name: name.to_string(),
        date: date.to_string(),
        amount,
        vat: 80.0,
        pct: 20,
        commentary: Some("séminaire billed".to_string()),
        file_url: None,
        file_name: None,
        status,
    }
}

/// Four bills in deliberately shuffled date order, receipts on all but one.
pub fn sample_bills() -> Vec<Bill> {
    vec![
        bill("47qAXb6fIm2zOKkLzMro", "encore", "2004-04-04", 400.0, BillStatus::Pending)
            .with_attachment("https://storage.test.tld/facture-encore.jpg", "facture-encore.jpg"),
        bill("BeKy5Mo4jkmdfPGYpTxZ", "test1", "2001-01-01", 100.0, BillStatus::Refused)
            .with_attachment("https://storage.test.tld/facture-test1.jpg", "facture-test1.jpg"),
        bill("UIUZtnPQvnbFnB0ozvJh", "test3", "2003-03-03", 300.0, BillStatus::Accepted)
            .with_attachment("https://storage.test.tld/facture-test3.jpg", "facture-test3.jpg"),
        bill("qcCK3SzECmaZAGRrHjaC", "test2", "2002-02-02", 200.0, BillStatus::Refused),
    ]
}
