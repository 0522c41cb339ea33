use super::*;

/// Tests ordering of the leaderboard query.
///
/// Verifies that wallets are ordered richest first and that ties are broken by
/// ascending member id.
///
/// Expected: Ok with accounts in wallet desc, user id asc order
#[tokio::test]
async fn orders_by_wallet_then_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, GUILD_ID as i64, 30, 50).await?;
    factory::create_account_with_wallet(db, GUILD_ID as i64, 20, 500).await?;
    factory::create_account_with_wallet(db, GUILD_ID as i64, 10, 50).await?;

    let repo = AccountRepository::new(db);
    let accounts = repo.get_richest(GUILD_ID, 10, 0).await?;

    let ids: Vec<u64> = accounts.iter().map(|a| a.user_id).collect();
    assert_eq!(ids, vec![20, 10, 30]);

    Ok(())
}

/// Tests that empty wallets are left off the leaderboard.
///
/// Expected: Ok with only positive wallets returned and counted
#[tokio::test]
async fn excludes_empty_wallets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account_with_wallet(db, GUILD_ID as i64, 1, 10).await?;
    factory::create_account_with_wallet(db, GUILD_ID as i64, 2, 0).await?;

    let repo = AccountRepository::new(db);

    assert_eq!(repo.get_richest(GUILD_ID, 10, 0).await?.len(), 1);
    assert_eq!(repo.count_with_balance(GUILD_ID).await?, 1);

    Ok(())
}

/// Tests paging through the leaderboard.
///
/// Expected: Ok with the second page starting after the first
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for user_id in 1..=5 {
        factory::create_account_with_wallet(db, GUILD_ID as i64, user_id, user_id * 100).await?;
    }

    let repo = AccountRepository::new(db);
    let page = repo.get_richest(GUILD_ID, 2, 2).await?;

    let wallets: Vec<i64> = page.iter().map(|a| a.wallet).collect();
    assert_eq!(wallets, vec![300, 200]);

    Ok(())
}
