//! Internal CLI error type.
//!
//! Grounded on the teacher's `thiserror`-derived error enums
//! (`ori_parse::error::ParseError`, `ori_eval::errors`): failures here are
//! process-level (I/O, an invariant the checked tree is supposed to
//! guarantee) rather than user-facing diagnostics. A diagnostic report is
//! always a documented success outcome (exit 0); only these variants drive
//! a nonzero exit.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("could not read '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
