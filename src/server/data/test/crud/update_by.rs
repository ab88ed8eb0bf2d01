use super::*;

/// Tests updating every delivery of one product.
///
/// Verifies that only rows matching the column value change and that members
/// absent from the change set keep their stored value.
///
/// Expected: Ok with both deliveries of the first product updated
#[tokio::test]
async fn updates_matching_rows_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let other = factory::create_product(db).await?;
    let line_a = factory::create_sewing_line(db).await?;
    let line_b = factory::create_sewing_line(db).await?;
    factory::create_delivery(db, product.id, line_a.id).await?;
    factory::create_delivery(db, product.id, line_b.id).await?;
    let untouched = factory::create_delivery(db, other.id, line_a.id).await?;

    let repo = CrudRepository::<sewing_line_delivery::Entity>::new(db);
    let changes = sewing_line_delivery::Entity::into_changes(UpsertSewingLineDeliveryDto {
        quantity_sewed: Some(12.0),
        ..Default::default()
    });
    let updated = repo
        .update_by(sewing_line_delivery::Column::ProductId, product.id, changes)
        .await?;

    assert_eq!(updated.len(), 2);
    assert!(updated.iter().all(|d| d.quantity_sewed == Some(12.0)));
    assert!(updated.iter().all(|d| d.quantity_original == Some(50.0)));

    let reloaded = repo.find_by_id(untouched.id).await?.unwrap();
    assert_eq!(reloaded.quantity_sewed, None);

    Ok(())
}

/// Tests updating by a value no row holds.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<product::Entity>::new(db);
    let changes = product::Entity::into_changes(UpsertProductDto {
        quantity_po: Some(10.0),
        ..Default::default()
    });
    let updated = repo
        .update_by(product::Column::ProductCode, "missing", changes)
        .await?;

    assert!(updated.is_empty());

    Ok(())
}

/// Tests applying distinct change sets to several products at once.
///
/// Expected: Ok with each product carrying its own new quantity and unknown ids skipped
#[tokio::test]
async fn update_each_applies_paired_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_product(db).await?;
    let second = factory::create_product(db).await?;
    let quantity = |value: f64| {
        product::Entity::into_changes(UpsertProductDto {
            quantity_po: Some(value),
            ..Default::default()
        })
    };

    let repo = CrudRepository::<product::Entity>::new(db);
    let updated = repo
        .update_each(vec![
            (first.id, quantity(100.0)),
            (second.id, quantity(200.0)),
            (9999, quantity(300.0)),
        ])
        .await?;

    assert_eq!(updated.len(), 2);
    assert_eq!(updated[0].quantity_po, Some(100.0));
    assert_eq!(updated[1].quantity_po, Some(200.0));

    Ok(())
}
