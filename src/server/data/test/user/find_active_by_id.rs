use super::*;

/// Tests that inactive users are still found.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn finds_inactive_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .status(ItemStatus::Inactive)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_active_by_id(user.id).await?.is_some());

    Ok(())
}

/// Tests that deleted users are not found.
///
/// Expected: Ok(None) although the row exists
#[tokio::test]
async fn excludes_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .status(ItemStatus::Deleted)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_active_by_id(user.id).await?.is_none());
    assert!(entity::prelude::User::find_by_id(user.id).one(db).await?.is_some());

    Ok(())
}
