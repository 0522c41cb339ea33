use crate::{data::treasury::TreasuryRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod deposit;
mod get_balance;
mod withdraw_checked;

const GUILD_ID: u64 = 1;
