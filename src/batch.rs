pub mod archive;
pub mod naming;
pub mod orchestrator;

pub use archive::{ArchiveSink, InMemoryArchive, ZipArchiveSink};
pub use naming::{archive_name, excerpt, file_name, sanitize_component};
pub use orchestrator::{
    BatchOrchestrator, BatchPlan, BatchReport, BusyFlag, BusyGuard, SkippedEntry, plan,
};
