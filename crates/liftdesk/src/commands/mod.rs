//! Command handlers for the `liftdesk` CLI.

pub mod board;
pub mod completion;
pub mod convert;
pub mod create;
pub mod delete;
pub mod export;
pub mod import;
pub mod init;
pub mod lead;
pub mod list;
pub mod move_cmd;
pub mod projects;
pub mod quote;
pub mod show;
pub mod stats;
pub mod update;
