use super::*;

/// Tests counting users of every status.
///
/// Expected: Ok(0) on an empty table, then Ok(2) including the deleted user
#[tokio::test]
async fn counts_every_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .status(ItemStatus::Deleted)
        .build()
        .await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}

/// Tests counting inside an open transaction.
///
/// Expected: Ok(1) through the transaction
#[tokio::test]
async fn counts_within_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let txn = db.begin().await?;

    assert_eq!(UserRepository::new(&txn).count().await?, 1);

    txn.rollback().await?;

    Ok(())
}
