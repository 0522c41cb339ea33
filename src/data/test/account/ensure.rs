use super::*;

/// Tests that ensuring a fresh member creates an empty wallet.
///
/// Expected: Ok with an account holding 0 silver
#[tokio::test]
async fn creates_missing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    repo.ensure(GUILD_ID, 42).await?;

    let account = repo.find(GUILD_ID, 42).await?.unwrap();
    assert_eq!(account.user_id, 42);
    assert_eq!(account.wallet, 0);

    Ok(())
}

/// Tests that ensuring an existing member leaves the wallet untouched.
///
/// Expected: Ok with the original balance preserved
#[tokio::test]
async fn keeps_existing_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, GUILD_ID as i64, 42, 750).await?;

    let repo = AccountRepository::new(db);
    repo.ensure(GUILD_ID, 42).await?;

    assert_eq!(repo.get_wallet(GUILD_ID, 42).await?, 750);

    Ok(())
}
