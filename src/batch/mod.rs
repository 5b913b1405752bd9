//! The batch deletion pipeline
//!
//! Input resolution, validation, and sequential execution. Tallies are kept
//! in a [`BatchReport`] passed by reference from stage to stage.

mod commands;
mod execute;
mod input;
mod report;
mod selection;
mod validate;

pub use commands::{run_batch, RunOutcome};
pub use execute::{execute_deletions, ExecutionOptions};
pub use input::{load_config, load_repo_file, parse_repo_list, BatchConfig, InputSource};
pub use report::BatchReport;
pub use selection::{parse_selection, prompt_selection, render_menu, Selection};
pub use validate::validate_candidates;
