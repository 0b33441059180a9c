use billfold_app::views::bills_ui;
use billfold_app::{Bills, FileSelection, NewBill, Route, Session, SubmitOutcome};
use billfold_app::containers::BillForm;
use billfold_testing::MockStore;
use billfold_types::{User, UserRole};

fn session() -> Session {
    Session::new(User {
        role: UserRole::Employee,
        email: "employee@test.tld".to_string(),
    })
}

fn populated_form() -> BillForm {
    BillForm {
        expense_type: "Fournitures de bureau".to_string(),
        expense_name: Some("Casque anti-bruit pour les collègues bruyants".to_string()),
        date: "2022-02-22".to_string(),
        amount: 42.0,
        vat: 70.0,
        pct: 25,
        commentary: Some("Rien de personnel contre Jean-Luc.".to_string()),
    }
}

#[test]
fn test_wrong_format_is_rejected_and_selection_cleared() {
    let mut controller = NewBill::new(MockStore::default(), session());

    let outcome = controller.handle_change_file("chucknorris.html", b"(x)".to_vec());
    assert_eq!(outcome, FileSelection::Rejected);
    assert!(controller.file_url().is_none());
    assert!(controller.file_name().is_none());
}

#[test]
fn test_rejection_discards_a_previously_accepted_file() {
    let mut controller = NewBill::new(MockStore::default(), session());

    controller.handle_change_file("facture.png", b"png".to_vec());
    assert_eq!(controller.file_name(), Some("facture.png"));

    controller.handle_change_file("notes.txt", b"txt".to_vec());
    assert!(controller.file_name().is_none());
}

#[test]
fn test_right_format_shows_the_file_name() {
    let mut controller = NewBill::new(MockStore::default(), session());

    let outcome = controller.handle_change_file("facture.png", b"png".to_vec());
    assert_eq!(
        outcome,
        FileSelection::Accepted {
            file_name: "facture.png".to_string()
        }
    );
    assert_eq!(controller.file_name(), Some("facture.png"));
}

#[tokio::test]
async fn test_completed_submission_navigates_to_the_bill_list() {
    let store = MockStore::default();
    let mut controller = NewBill::new(store.clone(), session());
    controller.handle_change_file("facture.png", b"png".to_vec());

    let outcome = controller.handle_submit(populated_form()).await;
    assert_eq!(outcome, SubmitOutcome::NavigatedAway(Route::Bills));
    assert_eq!(
        controller.file_url().map(String::from),
        Some("https://storage.test.tld/facture.png".to_string())
    );

    // The destination page renders with its heading, as after navigation.
    let list = Bills::new(store);
    let markup = bills_ui::render(&list.activate().await);
    assert!(markup.contains("Mes notes de frais"));
    assert!(markup.contains(r#"data-testid="btn-new-bill""#));
}

#[tokio::test]
async fn test_rejected_create_surfaces_the_message_and_stays() {
    let mut controller = NewBill::new(MockStore::rejecting_create("Erreur 404"), session());
    controller.handle_change_file("facture.jpg", b"jpg".to_vec());

    let outcome = controller.handle_submit(populated_form()).await;
    assert_eq!(outcome, SubmitOutcome::EditingWithError("Erreur 404".to_string()));
    assert!(controller.file_url().is_none());
}

#[tokio::test]
async fn test_rejected_update_surfaces_the_message_and_stays() {
    let mut controller = NewBill::new(MockStore::rejecting_update("Erreur 500"), session());

    let outcome = controller.handle_submit(populated_form()).await;
    assert_eq!(outcome, SubmitOutcome::EditingWithError("Erreur 500".to_string()));
}
