use super::*;

/// Tests recording a treasury transfer with a recipient.
///
/// Expected: Ok with the row stored using the `transfer` action
#[tokio::test]
async fn records_transfer_with_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TreasuryLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TreasuryLogRepository::new(db);
    repo.create(CreateTreasuryLogParams {
        guild_id: GUILD_ID,
        initiator_id: 10,
        action: TreasuryAction::Transfer,
        amount: 75,
        recipient_id: Some(20),
    })
    .await?;

    let history = repo.get_history(GUILD_ID, None).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].initiator_id, 10);
    assert_eq!(history[0].action, "transfer");
    assert_eq!(history[0].amount, 75);
    assert_eq!(history[0].recipient_id, Some(20));

    Ok(())
}

/// Tests recording a deposit without a recipient.
///
/// Expected: Ok with no recipient stored
#[tokio::test]
async fn records_deposit_without_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TreasuryLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TreasuryLogRepository::new(db);
    repo.create(CreateTreasuryLogParams {
        guild_id: GUILD_ID,
        initiator_id: 10,
        action: TreasuryAction::Add,
        amount: 500,
        recipient_id: None,
    })
    .await?;

    let history = repo.get_history(GUILD_ID, None).await?;
    assert_eq!(history[0].action, "add");
    assert_eq!(history[0].recipient_id, None);

    Ok(())
}
