use super::*;

/// Tests paging transfers newest first.
///
/// Verifies that the first page holds the newest entries and the second page
/// continues where the first ended.
///
/// Expected: Ok with pages in reverse insertion order
#[tokio::test]
async fn pages_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TransferLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for amount in 1..=3 {
        factory::transfer_log::TransferLogFactory::new(db, GUILD_ID as i64)
            .amount(amount)
            .build()
            .await?;
    }

    let repo = TransferRepository::new(db);

    let first: Vec<i64> = repo
        .get_history(GUILD_ID, PageRequest::new(2, 1))
        .await?
        .iter()
        .map(|e| e.amount)
        .collect();
    let second: Vec<i64> = repo
        .get_history(GUILD_ID, PageRequest::new(2, 2))
        .await?
        .iter()
        .map(|e| e.amount)
        .collect();

    assert_eq!(first, vec![3, 2]);
    assert_eq!(second, vec![1]);

    Ok(())
}

/// Tests a page past the end of the history.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn returns_empty_past_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TransferLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_transfer_log(db, GUILD_ID as i64, 10).await?;

    let repo = TransferRepository::new(db);

    assert!(repo
        .get_history(GUILD_ID, PageRequest::new(5, 2))
        .await?
        .is_empty());

    Ok(())
}
