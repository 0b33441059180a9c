use billfold_store::{BillDraft, BillStore, CreateBill, FileUpload, JsonStore, UpdateBill};
use billfold_types::BillStatus;
use tempfile::TempDir;

fn draft(file_url: Option<String>, file_name: Option<String>) -> BillDraft {
    BillDraft {
        email: "employee@test.tld".to_string(),
        bill_type: "Transports".to_string(),
        name: "Vol Paris Londres".to_string(),
        date: "2022-02-22".to_string(),
        amount: 348.0,
        vat: 70.0,
        pct: 20,
        commentary: None,
        file_url,
        file_name,
        status: BillStatus::Pending,
    }
}

#[tokio::test]
async fn test_list_is_empty_before_any_submission() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonStore::open(temp_dir.path()).unwrap();

    let bills = store.bills().list().await.unwrap();
    assert!(bills.is_empty());
}

#[tokio::test]
async fn test_create_then_update_persists_the_record() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonStore::open(temp_dir.path()).unwrap();
    let ops = store.bills();

    let created = ops
        .create(CreateBill {
            email: "employee@test.tld".to_string(),
            attachment: Some(FileUpload {
                file_name: "facture.png".to_string(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            }),
        })
        .await
        .unwrap();

    assert!(created.file_url.is_some());
    assert_eq!(created.file_name.as_deref(), Some("facture.png"));

    let updated = ops
        .update(UpdateBill {
            selector: created.id.clone(),
            data: draft(created.file_url.clone(), created.file_name.clone()),
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Vol Paris Londres");
    assert_eq!(updated.status, BillStatus::Pending);

    let bills = ops.list().await.unwrap();
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].id, created.id);
    assert_eq!(bills[0].date, "2022-02-22");
    assert_eq!(bills[0].file_name.as_deref(), Some("facture.png"));
}

#[tokio::test]
async fn test_create_without_attachment_leaves_file_fields_null() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonStore::open(temp_dir.path()).unwrap();

    let created = store
        .bills()
        .create(CreateBill {
            email: "employee@test.tld".to_string(),
            attachment: None,
        })
        .await
        .unwrap();

    assert!(created.file_url.is_none());
    assert!(created.file_name.is_none());
}

#[tokio::test]
async fn test_receipt_bytes_land_under_receipts_dir() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonStore::open(temp_dir.path()).unwrap();

    let created = store
        .bills()
        .create(CreateBill {
            email: "employee@test.tld".to_string(),
            attachment: Some(FileUpload {
                file_name: "facture.jpg".to_string(),
                bytes: b"jpeg bytes".to_vec(),
            }),
        })
        .await
        .unwrap();

    let url = created.file_url.unwrap();
    let stored = std::fs::read(&url).unwrap();
    assert_eq!(stored, b"jpeg bytes");
    assert!(url.contains("receipts"));
}

#[tokio::test]
async fn test_update_unknown_selector_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonStore::open(temp_dir.path()).unwrap();

    let err = store
        .bills()
        .update(UpdateBill {
            selector: "missing".to_string(),
            data: draft(None, None),
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("missing"));
}
