use super::*;

/// Tests crediting a member without an account.
///
/// Expected: Ok with the account created holding the credited amount
#[tokio::test]
async fn creates_account_on_first_credit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    repo.credit(GUILD_ID, 42, 250).await?;

    assert_eq!(repo.get_wallet(GUILD_ID, 42).await?, 250);

    Ok(())
}

/// Tests that repeated credits accumulate.
///
/// Expected: Ok with the wallet holding the sum of all credits
#[tokio::test]
async fn adds_to_existing_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, GUILD_ID as i64, 42, 100).await?;

    let repo = AccountRepository::new(db);
    repo.credit(GUILD_ID, 42, 25).await?;
    repo.credit(GUILD_ID, 42, 5).await?;

    assert_eq!(repo.get_wallet(GUILD_ID, 42).await?, 130);

    Ok(())
}

/// Tests that a credit only touches the targeted member.
///
/// Expected: Ok with other wallets unchanged
#[tokio::test]
async fn leaves_other_members_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, GUILD_ID as i64, 1, 10).await?;
    factory::create_account_with_wallet(db, GUILD_ID as i64, 2, 20).await?;

    let repo = AccountRepository::new(db);
    repo.credit(GUILD_ID, 1, 5).await?;

    assert_eq!(repo.get_wallet(GUILD_ID, 1).await?, 15);
    assert_eq!(repo.get_wallet(GUILD_ID, 2).await?, 20);

    Ok(())
}
