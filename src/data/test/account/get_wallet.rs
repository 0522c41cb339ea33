use super::*;

/// Tests reading the wallet of a member who has never been seen.
///
/// Expected: Ok(0) without creating an account
#[tokio::test]
async fn returns_zero_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);

    assert_eq!(repo.get_wallet(GUILD_ID, 7).await?, 0);
    assert!(repo.find(GUILD_ID, 7).await?.is_none());

    Ok(())
}

/// Tests that wallets are scoped per guild.
///
/// Expected: Ok with each guild reporting its own balance
#[tokio::test]
async fn scopes_wallet_by_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, 1, 42, 100).await?;
    factory::create_account_with_wallet(db, 2, 42, 900).await?;

    let repo = AccountRepository::new(db);

    assert_eq!(repo.get_wallet(1, 42).await?, 100);
    assert_eq!(repo.get_wallet(2, 42).await?, 900);

    Ok(())
}
