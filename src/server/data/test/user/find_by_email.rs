use super::*;

/// Tests finding a user by an email typed in a different case.
///
/// Expected: Ok(Some) with the stored user
#[tokio::test]
async fn ignores_case_and_whitespace() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("cutter@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("  Cutter@Example.COM ").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests finding an email nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
