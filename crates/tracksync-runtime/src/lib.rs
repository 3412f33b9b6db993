//! Filesystem side of tracksync: configuration, tracker I/O, working-tree
//! scanning and the sync pipeline that ties them to the engine.

pub mod config;
pub mod docs;
mod error;
pub mod init;
pub mod pattern;
pub mod reader;
pub mod scanner;
pub mod service;
pub mod writer;

pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_TRACKER_PATH, SectionConfig};
pub use docs::{DocumentationStatus, NormalizeReport};
pub use error::{Error, Result};
pub use init::InitOutcome;
pub use reader::TrackerReader;
pub use scanner::{ScanSpec, Scanner, WalkedFile};
pub use service::{SyncMode, SyncOutcome, SyncService};
pub use writer::{TrackerWriter, WriteOutcome};
