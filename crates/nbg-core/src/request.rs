//! The fetch request parsed from the command line.

use std::fmt;

use thiserror::Error;

/// Platform value naming the Windows family in distribution paths.
pub const WINDOWS_PLATFORM: &str = "win32";

/// Product whose releases live on `iojs.org`.
pub const IOJS: &str = "iojs";

/// One or more request fields were absent or empty.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("missing {0}")]
pub struct UsageError(pub &'static str);

/// What to fetch: one product build for one platform and architecture.
///
/// All fields are non-empty. The version is used verbatim when building
/// URLs; a bad version only shows up as a failed download.
///
/// # Example
///
/// ```
/// use nbg_core::Request;
///
/// let req = Request::parse(Some("node-linux-x64"), Some("4.2.1")).unwrap();
/// assert_eq!(req.dir_name(), "node-linux-x64");
/// assert_eq!(req.archive_name(), "node-v4.2.1-linux-x64.tar.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    product: String,
    platform: String,
    arch: String,
    version: String,
}

impl Request {
    /// Build a request from a `{product}-{platform}-{arch}` triple and a version.
    ///
    /// Parts past the third are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError`] naming the first field that is missing or empty.
    pub fn parse(target: Option<&str>, version: Option<&str>) -> Result<Self, UsageError> {
        let mut parts = target.unwrap_or_default().split('-');
        let product = non_empty(parts.next(), "product")?;
        let platform = non_empty(parts.next(), "platform")?;
        let arch = non_empty(parts.next(), "architecture")?;
        let version = non_empty(version, "version")?;

        Ok(Self {
            product,
            platform,
            arch,
            version,
        })
    }

    /// Runtime lineage, usually `node` or `iojs`.
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Platform name as used in release filenames (`linux`, `darwin`, `win32`).
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Architecture name as used in release filenames (`x64`, `x86`, `armv7l`).
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Release version without the leading `v`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the product is exactly `iojs`.
    pub fn is_iojs(&self) -> bool {
        self.product == IOJS
    }

    /// Whether the target takes the direct-file flow instead of a tarball.
    pub fn is_windows(&self) -> bool {
        self.platform == WINDOWS_PLATFORM
    }

    /// Output directory and package name: `{product}-{platform}-{arch}`.
    pub fn dir_name(&self) -> String {
        format!("{}-{}-{}", self.product, self.platform, self.arch)
    }

    /// Top-level directory inside the release tarball.
    pub fn base_name(&self) -> String {
        format!(
            "{}-v{}-{}-{}",
            self.product, self.version, self.platform, self.arch
        )
    }

    /// Release tarball filename: `{base_name}.tar.gz`.
    pub fn archive_name(&self) -> String {
        format!("{}.tar.gz", self.base_name())
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.dir_name(), self.version)
    }
}

fn non_empty(part: Option<&str>, field: &'static str) -> Result<String, UsageError> {
    match part {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(UsageError(field)),
    }
}
