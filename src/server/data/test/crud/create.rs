use super::*;

/// Tests creating a product from a request body.
///
/// Verifies that the stored row carries the submitted product code and the
/// defaults filled in for new rows.
///
/// Expected: Ok with status active and both timestamps set
#[tokio::test]
async fn creates_product_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<product::Entity>::new(db);
    let created = repo.create(new_product("PO-0001")).await?;

    assert_eq!(created.product_code, "PO-0001");
    assert_eq!(created.status, ItemStatus::Active);
    assert_eq!(created.quantity_po, None);
    assert_eq!(created.created_at, created.updated_at);

    Ok(())
}

/// Tests that a duplicate product code violates the unique constraint.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_product_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<product::Entity>::new(db);
    repo.create(new_product("PO-0002")).await?;
    let result = repo.create(new_product("PO-0002")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a link row pointing at a missing product is rejected.
///
/// Expected: Err classified as a foreign key violation
#[tokio::test]
async fn rejects_link_to_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let line = factory::create_sewing_line(db).await?;

    let mut model = delivery_changes(line.id, 5.0);
    model.product_id = ActiveValue::Set(999);
    sewing_line_delivery::Entity::fill_defaults(&mut model);

    let repo = CrudRepository::<sewing_line_delivery::Entity>::new(db);
    let result = repo.create(model).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
