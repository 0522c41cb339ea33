mod account;
mod lootsplit;
mod transfer;
mod treasury;
mod treasury_log;
