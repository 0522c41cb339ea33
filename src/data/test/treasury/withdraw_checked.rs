use super::*;

/// Tests withdrawing an amount the treasury covers.
///
/// Expected: Ok(true) with the amount removed
#[tokio::test]
async fn withdraws_covered_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Treasury)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_treasury(db, GUILD_ID as i64, 500).await?;

    let repo = TreasuryRepository::new(db);

    assert!(repo.withdraw_checked(GUILD_ID, 500).await?);
    assert_eq!(repo.get_balance(GUILD_ID).await?, 0);

    Ok(())
}

/// Tests withdrawing more than the treasury holds.
///
/// Expected: Ok(false) with the balance unchanged
#[tokio::test]
async fn refuses_overdraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Treasury)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_treasury(db, GUILD_ID as i64, 500).await?;

    let repo = TreasuryRepository::new(db);

    assert!(!repo.withdraw_checked(GUILD_ID, 501).await?);
    assert_eq!(repo.get_balance(GUILD_ID).await?, 500);

    Ok(())
}

/// Tests withdrawing from a treasury that was never funded.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_missing_treasury() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Treasury)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TreasuryRepository::new(db);

    assert!(!repo.withdraw_checked(GUILD_ID, 1).await?);

    Ok(())
}
