use crate::{
    data::transfer::TransferRepository,
    error::AppError,
    model::{account::TransferParams, pagination::PageRequest},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_history;

const GUILD_ID: u64 = 1;
