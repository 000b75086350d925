// NOTE: markstale design notes
//
// Why compare mtimes against one in-memory instant?
// - The cutoff is computed once per run; every marker is judged against it
// - No reference file on disk, so nothing to clean up on any exit path
//
// Why classify on the first old marker of a directory?
// - A directory only matters if it has an old marker at all
// - One probe per directory decides it; later markers of the same directory are skipped
//
// Why stream plain output?
// - Each stale directory prints the moment it is confirmed
// - An interrupted run leaves a valid, if partial, list

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::{exit_code, run};
