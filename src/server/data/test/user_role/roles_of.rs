use super::*;

/// Tests reading a user's roles joined with the role rows.
///
/// Expected: Ok with both assignments of the user in insertion order
#[tokio::test]
async fn returns_assignments_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let admin = factory::create_admin_role(db).await?;
    let cutter = factory::create_role(db).await?;
    factory::create_user_role(db, user.id, admin.id).await?;
    factory::create_user_role(db, user.id, cutter.id).await?;
    factory::create_user_role(db, other.id, cutter.id).await?;

    let repo = UserRoleRepository::new(db);
    let roles = repo.roles_of(user.id).await?;

    let names: Vec<Option<&str>> = roles
        .iter()
        .map(|(_, role)| role.as_ref().map(|r| r.role.as_str()))
        .collect();
    assert_eq!(names, vec![Some("admin"), Some(cutter.role.as_str())]);
    assert!(roles.iter().all(|(link, _)| link.user_id == user.id));

    Ok(())
}

/// Tests a user without any role.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRoleRepository::new(db);

    assert!(repo.roles_of(user.id).await?.is_empty());

    Ok(())
}
