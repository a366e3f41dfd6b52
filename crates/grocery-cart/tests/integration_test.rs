use grocery_cart::config::AppConfig;
use grocery_cart::error::CatalogError;
use grocery_cart::lifecycle::CatalogSystem;
use grocery_cart::model::{ProductField, ProductFields, ProductId};
use grocery_cart::session::{CommitOutcome, EditMode, Step};

fn fields(id: &str, name: &str, price: &str) -> ProductFields {
    ProductFields {
        id: id.into(),
        product_name: name.to_string(),
        brand: "Store Brand".to_string(),
        image: None,
        price: price.into(),
    }
}

async fn seeded_system() -> CatalogSystem {
    let system = CatalogSystem::new(&AppConfig::default());
    system
        .seed(vec![
            fields("a1", "Apples", "$3.65"),
            fields("b1", "Bread", "$2.10"),
        ])
        .await
        .expect("Failed to seed catalog");
    system
}

/// Full walk through one session against a real store.
#[tokio::test]
async fn test_stage_commit_and_merge_against_real_store() {
    let system = seeded_system().await;
    let mut session = system.session();

    assert_eq!(session.refresh().await.unwrap(), 2);
    let a1 = ProductId::new("a1");

    session.increment(&a1);
    assert_eq!(session.increment(&a1), Some(2));
    assert_eq!(
        session.commit_to_cart(&a1),
        Ok(CommitOutcome::Added { quantity: 2 })
    );

    session.increment(&a1);
    assert_eq!(
        session.commit_to_cart(&a1),
        Ok(CommitOutcome::Merged { quantity: 3 })
    );

    let entries = session.cart().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].product().product_name, "Apples");
    assert_eq!(entries[0].quantity(), 3);

    drop(session);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_zero_quantity_commit_reports_product_name() {
    let system = seeded_system().await;
    let mut session = system.session();
    session.refresh().await.unwrap();

    let err = session.commit_to_cart(&ProductId::new("b1")).unwrap_err();
    assert_eq!(err, CatalogError::QuantityNotSelected("Bread".into()));
    assert_eq!(session.status(), Some("Please select quantity for Bread"));
    assert!(session.cart().is_empty());

    drop(session);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_refresh_resets_ledger_but_keeps_cart() {
    let system = seeded_system().await;
    let mut session = system.session();
    session.refresh().await.unwrap();

    let a1 = ProductId::new("a1");
    let b1 = ProductId::new("b1");
    session.increment(&a1);
    session.commit_to_cart(&a1).unwrap();
    session.increment(&b1);
    session.increment(&b1);

    system
        .seed(vec![fields("c1", "Cheese", "$7.00")])
        .await
        .unwrap();
    assert_eq!(session.refresh().await.unwrap(), 3);

    assert!(session
        .ledger()
        .entries()
        .iter()
        .all(|entry| entry.quantity == 0));
    assert_eq!(session.ledger().len(), 3);
    assert_eq!(session.cart().get(&a1).map(|e| e.quantity()), Some(1));

    drop(session);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_through_form_then_refresh() {
    let system = CatalogSystem::new(&AppConfig::default());
    let mut session = system.session();

    session.stage_field(ProductField::Id, "0009");
    session.stage_field(ProductField::ProductName, "Honey");
    session.stage_field(ProductField::Price, "$8.00");

    // Brand is missing.
    let err = session.submit().await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::ValidationRejected("Product validation failed: missing brand".into())
    );
    assert_eq!(session.editor().mode(), EditMode::Creating);
    assert_eq!(session.editor().staged().product_name, "Honey");
    assert!(session.catalog().is_empty());

    session.stage_field(ProductField::Brand, "Bee Farm");
    let message = session.submit().await.unwrap();
    assert_eq!(message, "Product added successfully");
    assert_eq!(session.status(), Some("Product added successfully"));
    assert_eq!(session.editor().staged(), &ProductFields::default());
    assert_eq!(session.catalog().len(), 1);
    assert_eq!(session.catalog().products()[0].price.as_str(), "$8.00");

    drop(session);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edit_and_delete_are_addressed_by_record_key() {
    let system = seeded_system().await;
    let mut session = system.session();
    session.refresh().await.unwrap();

    let bread = session
        .catalog()
        .find(&ProductId::new("b1"))
        .cloned()
        .unwrap();
    session.start_edit(&bread);
    assert_eq!(session.editor().mode(), EditMode::Editing(bread.record_key));

    // Changing the business id is just another field change.
    session.stage_field(ProductField::Id, "b2");
    session.stage_field(ProductField::Price, "$1.99");
    assert_eq!(
        session.submit().await.unwrap(),
        "Product updated successfully"
    );
    assert_eq!(session.editor().mode(), EditMode::Creating);

    let edited = session.catalog().find_by_key(bread.record_key).unwrap();
    assert_eq!(edited.id, ProductId::new("b2"));
    assert_eq!(edited.price.as_str(), "$1.99");
    assert_eq!(session.catalog().len(), 2);

    assert_eq!(
        session.delete_product(bread.record_key).await.unwrap(),
        "Product deleted successfully"
    );
    assert_eq!(session.catalog().len(), 1);
    assert!(session.catalog().find_by_key(bread.record_key).is_none());

    let err = session.delete_product(bread.record_key).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));

    drop(session);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_steppers_and_removal() {
    let system = seeded_system().await;
    let mut session = system.session();
    session.refresh().await.unwrap();

    let a1 = ProductId::new("a1");
    session.increment(&a1);
    session.commit_to_cart(&a1).unwrap();

    assert_eq!(session.adjust_cart_quantity(&a1, Step::Down), Some(1));
    assert_eq!(session.adjust_cart_quantity(&a1, Step::Up), Some(2));

    session.remove_from_cart(&a1);
    session.remove_from_cart(&a1);
    assert!(session.cart().is_empty());

    session.increment(&a1);
    session.commit_to_cart(&a1).unwrap();
    session.clear_cart();
    assert_eq!(session.cart().len(), 0);

    drop(session);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sessions_sharing_a_store_are_independent() {
    let system = seeded_system().await;
    let mut first = system.session();
    let mut second = system.session();
    first.refresh().await.unwrap();
    second.refresh().await.unwrap();

    let a1 = ProductId::new("a1");
    first.increment(&a1);
    first.commit_to_cart(&a1).unwrap();

    assert_eq!(first.cart().len(), 1);
    assert!(second.cart().is_empty());
    assert_eq!(second.ledger().quantity(&a1), Some(0));

    drop(first);
    drop(second);
    system.shutdown().await.unwrap();
}
