use super::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests recording a lootsplit with its recipients.
///
/// Verifies that the log row keeps the computed amounts and that one recipient row
/// is written per member.
///
/// Expected: Ok with the log and two recipient rows stored
#[tokio::test]
async fn records_log_and_recipients() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LootsplitLog)
        .with_table(entity::prelude::LootsplitRecipient)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = LootsplitPlan::compute(1_000, 10, 2)?;
    let repo = LootsplitRepository::new(db);
    let id = repo
        .create(CreateLootsplitLogParams {
            guild_id: GUILD_ID,
            initiator_id: 9,
            plan,
            recipients: vec![11, 22],
        })
        .await?;

    let history = repo.get_history(GUILD_ID, PageRequest::new(5, 1)).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].initiator_id, 9);
    assert_eq!(history[0].total, 1_000);
    assert_eq!(history[0].tax_percent, 10);
    assert_eq!(history[0].share, 450);
    assert_eq!(history[0].recipient_ids, vec![11, 22]);

    let rows = entity::prelude::LootsplitRecipient::find()
        .filter(entity::lootsplit_recipient::Column::LootsplitId.eq(id))
        .count(db)
        .await?;
    assert_eq!(rows, 2);

    Ok(())
}
