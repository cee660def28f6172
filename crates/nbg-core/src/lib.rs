//! node-bin-gen core
//!
//! Resolves the release artifacts of a `node` or `iojs` build for a given
//! platform and architecture, downloads them into a package directory and
//! writes an npm `package.json` describing the installed binaries.
//!
//! # Directory Layout
//!
//! ```text
//! node-linux-x64/
//! ├── node-v4.2.1-linux-x64.tar.gz   # archive flow
//! └── package.json
//!
//! node-win32-x64/
//! ├── node.exe                       # direct-file flow
//! ├── node.lib
//! └── package.json
//! ```

pub mod descriptor;
pub mod fetch;
pub mod remote;
pub mod reporter;
pub mod request;

pub use descriptor::Descriptor;
pub use fetch::{FetchError, FetchOutcome, Fetcher, http_client};
pub use remote::Mirrors;
pub use reporter::{NullReporter, Reporter};
pub use request::{Request, UsageError};

/// User Agent string for distribution requests
pub const USER_AGENT: &str = concat!("node-bin-gen/", env!("CARGO_PKG_VERSION"));
