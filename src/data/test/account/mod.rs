use crate::{data::account::AccountRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod credit;
mod debit_checked;
mod ensure;
mod get_richest;
mod get_wallet;
mod total_owed;

const GUILD_ID: u64 = 1;
