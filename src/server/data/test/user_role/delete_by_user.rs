use super::*;

/// Tests removing every role of one user.
///
/// Expected: Ok(2) with the other user's assignment kept
#[tokio::test]
async fn removes_only_that_users_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, role, _) = factory::helpers::create_user_with_role(db, "cutter").await?;
    let extra = factory::create_role(db).await?;
    factory::create_user_role(db, user.id, extra.id).await?;
    let other = factory::create_user(db).await?;
    factory::create_user_role(db, other.id, role.id).await?;

    let repo = UserRoleRepository::new(db);
    let removed = repo.delete_by_user(user.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.roles_of(user.id).await?.is_empty());
    assert_eq!(repo.roles_of(other.id).await?.len(), 1);

    Ok(())
}
