use super::*;

/// Tests that history prefers recipient rows.
///
/// Expected: Ok with recipients read from the recipient table
#[tokio::test]
async fn reads_recipient_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LootsplitLog)
        .with_table(entity::prelude::LootsplitRecipient)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::lootsplit_log::LootsplitLogFactory::new(db, GUILD_ID as i64)
        .recipients(vec![300, 100, 200])
        .build()
        .await?;

    let repo = LootsplitRepository::new(db);
    let history = repo.get_history(GUILD_ID, PageRequest::new(5, 1)).await?;

    assert_eq!(history[0].recipient_ids, vec![100, 200, 300]);

    Ok(())
}

/// Tests history for rows written without recipient rows.
///
/// Expected: Ok with recipients parsed from the comma separated column
#[tokio::test]
async fn falls_back_to_recipient_column() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LootsplitLog)
        .with_table(entity::prelude::LootsplitRecipient)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::lootsplit_log::LootsplitLogFactory::new(db, GUILD_ID as i64)
        .recipients(vec![7, 8])
        .with_recipient_rows(false)
        .build()
        .await?;

    let repo = LootsplitRepository::new(db);
    let history = repo.get_history(GUILD_ID, PageRequest::new(5, 1)).await?;

    assert_eq!(history[0].recipient_ids, vec![7, 8]);

    Ok(())
}

/// Tests ordering and paging of lootsplit history.
///
/// Expected: Ok with the newest lootsplit first and the page size respected
#[tokio::test]
async fn pages_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LootsplitLog)
        .with_table(entity::prelude::LootsplitRecipient)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for total in [100, 200, 300] {
        factory::lootsplit_log::LootsplitLogFactory::new(db, GUILD_ID as i64)
            .total(total)
            .build()
            .await?;
    }

    let repo = LootsplitRepository::new(db);
    let history = repo.get_history(GUILD_ID, PageRequest::new(2, 1)).await?;

    let totals: Vec<i64> = history.iter().map(|e| e.total).collect();
    assert_eq!(totals, vec![300, 200]);

    Ok(())
}

/// Tests history of a guild without lootsplits.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn returns_empty_for_new_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LootsplitLog)
        .with_table(entity::prelude::LootsplitRecipient)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_lootsplit_log(db, 2).await?;

    let repo = LootsplitRepository::new(db);

    assert!(repo
        .get_history(GUILD_ID, PageRequest::new(5, 1))
        .await?
        .is_empty());

    Ok(())
}
