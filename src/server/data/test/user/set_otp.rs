use super::*;

/// Tests storing and then clearing a pending one-time password.
///
/// Expected: Ok with the OTP stored, then Ok with the OTP removed
#[tokio::test]
async fn stores_and_clears_otp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let stored = repo.set_otp(user.id, Some("482913".to_string())).await?;
    assert_eq!(stored.otp.as_deref(), Some("482913"));
    assert_eq!(stored.email, user.email);

    let cleared = repo.set_otp(user.id, None).await?;
    assert!(cleared.otp.is_none());

    Ok(())
}

/// Tests setting an OTP for a user that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_otp(404, Some("000000".to_string())).await;

    assert!(result.is_err());

    Ok(())
}
