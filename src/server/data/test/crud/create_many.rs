use super::*;

/// Tests inserting several products at once.
///
/// Expected: Ok with every row returned in submission order
#[tokio::test]
async fn inserts_every_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<product::Entity>::new(db);
    let created = repo
        .create_many(vec![new_product("PO-A"), new_product("PO-B"), new_product("PO-C")])
        .await?;

    let codes: Vec<&str> = created.iter().map(|p| p.product_code.as_str()).collect();
    assert_eq!(codes, vec!["PO-A", "PO-B", "PO-C"]);
    assert_eq!(product::Entity::find().count(db).await?, 3);

    Ok(())
}

/// Tests that a failing row rolls back the rows inserted before it.
///
/// Expected: Err and no product stored
#[tokio::test]
async fn rolls_back_when_one_row_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<product::Entity>::new(db);
    let result = repo
        .create_many(vec![new_product("PO-D"), new_product("PO-D")])
        .await;

    assert!(result.is_err());
    assert_eq!(product::Entity::find().count(db).await?, 0);

    Ok(())
}
