pub use super::account::Entity as Account;
pub use super::lootsplit_log::Entity as LootsplitLog;
pub use super::lootsplit_recipient::Entity as LootsplitRecipient;
pub use super::transfer_log::Entity as TransferLog;
pub use super::treasury::Entity as Treasury;
pub use super::treasury_log::Entity as TreasuryLog;
