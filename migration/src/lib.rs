pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_accounts_table;
mod m20261018_000002_create_treasury_table;
mod m20261018_000003_create_lootsplit_logs_table;
mod m20261018_000004_create_lootsplit_recipients_table;
mod m20261018_000005_create_transfer_logs_table;
mod m20261018_000006_create_treasury_logs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_accounts_table::Migration),
            Box::new(m20261018_000002_create_treasury_table::Migration),
            Box::new(m20261018_000003_create_lootsplit_logs_table::Migration),
            Box::new(m20261018_000004_create_lootsplit_recipients_table::Migration),
            Box::new(m20261018_000005_create_transfer_logs_table::Migration),
            Box::new(m20261018_000006_create_treasury_logs_table::Migration),
        ]
    }
}
