use super::*;

/// Tests recording a transfer.
///
/// Expected: Ok with sender, receiver and amount stored
#[tokio::test]
async fn records_transfer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TransferLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransferRepository::new(db);
    repo.create(&TransferParams {
        guild_id: GUILD_ID,
        sender_id: 10,
        receiver_id: 20,
        amount: 45,
    })
    .await?;

    let history = repo.get_history(GUILD_ID, PageRequest::new(5, 1)).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].sender_id, 10);
    assert_eq!(history[0].receiver_id, 20);
    assert_eq!(history[0].amount, 45);

    Ok(())
}
