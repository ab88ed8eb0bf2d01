use super::*;

/// Tests syncing a product's deliveries with a submitted list.
///
/// The product starts with deliveries on lines A and B. The submitted list
/// carries line A with a new quantity and line C. Line A must be updated in
/// place, line B removed and line C inserted.
///
/// Expected: Ok with deliveries on lines A and C only
#[tokio::test]
async fn adds_updates_and_removes_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let line_a = factory::create_sewing_line(db).await?;
    let line_b = factory::create_sewing_line(db).await?;
    let line_c = factory::create_sewing_line(db).await?;
    let kept = factory::create_delivery(db, product.id, line_a.id).await?;
    factory::create_delivery(db, product.id, line_b.id).await?;

    let repo = CrudRepository::<sewing_line_delivery::Entity>::new(db);
    let rows = repo
        .sync_by(
            sewing_line_delivery::Column::ProductId,
            Value::from(product.id),
            sewing_line_delivery::Column::SewingLineId,
            vec![delivery_changes(line_a.id, 30.0), delivery_changes(line_c.id, 5.0)],
        )
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, kept.id);
    assert_eq!(rows[0].sewing_line_id, line_a.id);
    assert_eq!(rows[0].quantity_sewed, Some(30.0));
    assert_eq!(rows[0].quantity_original, Some(50.0));
    assert_eq!(rows[1].sewing_line_id, line_c.id);
    assert_eq!(rows[1].product_id, product.id);
    assert_eq!(rows[1].status, ItemStatus::Active);

    Ok(())
}

/// Tests that syncing one product leaves other products' rows alone.
///
/// Expected: Ok with the other product's delivery still stored
#[tokio::test]
async fn leaves_other_parents_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let other = factory::create_product(db).await?;
    let line = factory::create_sewing_line(db).await?;
    factory::create_delivery(db, product.id, line.id).await?;
    let foreign = factory::create_delivery(db, other.id, line.id).await?;

    let repo = CrudRepository::<sewing_line_delivery::Entity>::new(db);
    let rows = repo
        .sync_by(
            sewing_line_delivery::Column::ProductId,
            Value::from(product.id),
            sewing_line_delivery::Column::SewingLineId,
            Vec::new(),
        )
        .await?;

    assert!(rows.is_empty());
    assert!(repo.find_by_id(foreign.id).await?.is_some());

    Ok(())
}
