use crate::{
    data::treasury_log::TreasuryLogRepository,
    error::AppError,
    model::{
        pagination::PageRequest,
        treasury::{CreateTreasuryLogParams, TreasuryAction},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_history;

const GUILD_ID: u64 = 1;
