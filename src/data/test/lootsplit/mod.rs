use crate::{
    data::lootsplit::LootsplitRepository,
    error::AppError,
    model::{
        lootsplit::{CreateLootsplitLogParams, LootsplitPlan},
        pagination::PageRequest,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_history;

const GUILD_ID: u64 = 1;
