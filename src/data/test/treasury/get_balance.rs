use super::*;

/// Tests reading a treasury that was never funded.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Treasury)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TreasuryRepository::new(db);

    assert_eq!(repo.get_balance(GUILD_ID).await?, 0);

    Ok(())
}

/// Tests reading an existing treasury.
///
/// Expected: Ok with the stored balance
#[tokio::test]
async fn returns_stored_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Treasury)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_treasury(db, GUILD_ID as i64, 1_234).await?;

    let repo = TreasuryRepository::new(db);

    assert_eq!(repo.get_balance(GUILD_ID).await?, 1_234);

    Ok(())
}
