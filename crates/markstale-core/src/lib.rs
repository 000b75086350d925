//! markstale-core - find stale project directories in a marker-file mirror tree
//!
//! A mirror tree looks like `<root>/<project>/<artifact>`, where every
//! verified artifact has a `<artifact>.hash` marker whose modification time
//! records when the project was last touched. A project is stale when it has
//! markers and every one of them predates the cutoff.
//!
//! # Example
//!
//! ```no_run
//! use markstale_core::{ScanOptions, Scanner};
//! use std::path::PathBuf;
//!
//! let options = ScanOptions {
//!     root: PathBuf::from("/srv/mirror/packages"),
//!     days: 30,
//!     ..ScanOptions::default()
//! };
//!
//! let mut stale: Vec<PathBuf> = Vec::new();
//! let summary = Scanner::new(&options)?.run(&mut stale)?;
//! assert_eq!(summary.stale, stale.len());
//! # Ok::<(), markstale_core::Error>(())
//! ```

pub mod classify;
pub mod cutoff;
pub mod error;
pub mod marker;
pub mod probe;
pub mod report;
pub mod scan;

pub use classify::{Classification, ClassificationCache};
pub use cutoff::{Cutoff, CutoffMode, DEFAULT_DAYS};
pub use error::{Error, Result};
pub use marker::{DEFAULT_SUFFIX, MarkerEntry, MarkerPattern, OldMarkers, old_markers};
pub use probe::{FreshnessProbe, FsProbe};
pub use report::StaleReporter;
pub use scan::{ScanOptions, ScanSummary, Scanner};
