use super::*;

/// Tests deleting a product by its code.
///
/// Expected: Ok(1) and the product gone
#[tokio::test]
async fn deletes_matching_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    factory::create_product(db).await?;

    let repo = CrudRepository::<product::Entity>::new(db);
    let deleted = repo
        .delete_by(product::Column::ProductCode, product.product_code.clone())
        .await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(product.id).await?.is_none());
    assert_eq!(product::Entity::find().count(db).await?, 1);

    Ok(())
}

/// Tests that deleting a product removes its stage rows through the cascade.
///
/// Expected: Ok with the product's deliveries gone
#[tokio::test]
async fn cascades_to_stage_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let line = factory::create_sewing_line(db).await?;
    factory::create_delivery(db, product.id, line.id).await?;

    let repo = CrudRepository::<product::Entity>::new(db);
    repo.delete_by(product::Column::Id, product.id).await?;

    assert_eq!(sewing_line_delivery::Entity::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting by a value no row holds.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<product::Entity>::new(db);
    let deleted = repo.delete_by(product::Column::Id, 42).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
