//! Library side of the `dossier` command: logging bootstrap and the run
//! pipeline, shared by the binary and its integration tests.

pub mod logging;
pub mod pipeline;
pub mod types;
