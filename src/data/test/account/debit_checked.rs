use super::*;

/// Tests debiting less than the wallet holds.
///
/// Expected: Ok(true) with the amount removed
#[tokio::test]
async fn debits_covered_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, GUILD_ID as i64, 42, 100).await?;

    let repo = AccountRepository::new(db);

    assert!(repo.debit_checked(GUILD_ID, 42, 40).await?);
    assert_eq!(repo.get_wallet(GUILD_ID, 42).await?, 60);

    Ok(())
}

/// Tests debiting the whole wallet.
///
/// Expected: Ok(true) with the wallet at exactly 0
#[tokio::test]
async fn debits_entire_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, GUILD_ID as i64, 42, 100).await?;

    let repo = AccountRepository::new(db);

    assert!(repo.debit_checked(GUILD_ID, 42, 100).await?);
    assert_eq!(repo.get_wallet(GUILD_ID, 42).await?, 0);

    Ok(())
}

/// Tests debiting more than the wallet holds.
///
/// Expected: Ok(false) with the wallet unchanged
#[tokio::test]
async fn refuses_overdraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, GUILD_ID as i64, 42, 100).await?;

    let repo = AccountRepository::new(db);

    assert!(!repo.debit_checked(GUILD_ID, 42, 101).await?);
    assert_eq!(repo.get_wallet(GUILD_ID, 42).await?, 100);

    Ok(())
}

/// Tests debiting a member without an account.
///
/// Expected: Ok(false) and no account created
#[tokio::test]
async fn refuses_missing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);

    assert!(!repo.debit_checked(GUILD_ID, 42, 1).await?);
    assert!(repo.find(GUILD_ID, 42).await?.is_none());

    Ok(())
}

/// Tests two debits racing for the same wallet.
///
/// Expected: exactly one debit succeeds and the wallet never goes negative
#[tokio::test]
async fn concurrent_debits_cannot_overdraw() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, GUILD_ID as i64, 42, 100).await?;

    let repo = AccountRepository::new(db);
    let (first, second) = tokio::join!(
        repo.debit_checked(GUILD_ID, 42, 60),
        repo.debit_checked(GUILD_ID, 42, 60)
    );

    assert!(first? ^ second?);
    assert_eq!(repo.get_wallet(GUILD_ID, 42).await?, 40);

    Ok(())
}
