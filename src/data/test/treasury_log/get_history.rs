use super::*;

/// Tests that the treasury history is newest first.
///
/// Expected: Ok with entries in reverse insertion order
#[tokio::test]
async fn returns_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TreasuryLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_treasury_log(db, GUILD_ID as i64, "add", 1, None).await?;
    factory::create_treasury_log(db, GUILD_ID as i64, "take", 2, None).await?;
    factory::create_treasury_log(db, GUILD_ID as i64, "transfer", 3, Some(5)).await?;

    let repo = TreasuryLogRepository::new(db);
    let history = repo.get_history(GUILD_ID, None).await?;

    let amounts: Vec<i64> = history.iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![3, 2, 1]);

    Ok(())
}

/// Tests paging the treasury history.
///
/// Expected: Ok with only the requested slice
#[tokio::test]
async fn pages_when_requested() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TreasuryLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for amount in 1..=5 {
        factory::create_treasury_log(db, GUILD_ID as i64, "add", amount, None).await?;
    }

    let repo = TreasuryLogRepository::new(db);
    let history = repo
        .get_history(GUILD_ID, Some(PageRequest::new(2, 2)))
        .await?;

    let amounts: Vec<i64> = history.iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![3, 2]);

    Ok(())
}

/// Tests that other guilds' entries are not returned.
///
/// Expected: Ok with an empty history
#[tokio::test]
async fn ignores_other_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TreasuryLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_treasury_log(db, 2, "add", 100, None).await?;

    let repo = TreasuryLogRepository::new(db);

    assert!(repo.get_history(GUILD_ID, None).await?.is_empty());

    Ok(())
}
