use super::*;

/// Tests summing the wallets of a guild.
///
/// Expected: Ok with the sum of the guild's wallets only
#[tokio::test]
async fn sums_guild_wallets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, GUILD_ID as i64, 1, 100).await?;
    factory::create_account_with_wallet(db, GUILD_ID as i64, 2, 250).await?;
    factory::create_account_with_wallet(db, GUILD_ID as i64, 3, 0).await?;
    factory::create_account_with_wallet(db, 99, 1, 5_000).await?;

    let repo = AccountRepository::new(db);

    assert_eq!(repo.total_owed(GUILD_ID).await?, 350);

    Ok(())
}

/// Tests summing a guild with no accounts.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_empty_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);

    assert_eq!(repo.total_owed(GUILD_ID).await?, 0);

    Ok(())
}
