use super::*;

/// Tests the first deposit into a guild treasury.
///
/// Expected: Ok with the row created holding the deposit
#[tokio::test]
async fn creates_treasury_on_first_deposit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Treasury)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TreasuryRepository::new(db);
    repo.deposit(GUILD_ID, 300).await?;

    assert_eq!(repo.get_balance(GUILD_ID).await?, 300);

    Ok(())
}

/// Tests depositing into an existing treasury.
///
/// Expected: Ok with the deposit added to the balance
#[tokio::test]
async fn adds_to_existing_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Treasury)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_treasury(db, GUILD_ID as i64, 1_000).await?;

    let repo = TreasuryRepository::new(db);
    repo.deposit(GUILD_ID, 1).await?;

    assert_eq!(repo.get_balance(GUILD_ID).await?, 1_001);

    Ok(())
}
