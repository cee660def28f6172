//! The `package.json` written next to the downloaded binaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::request::Request;

/// GitHub account hosting the `{product}-bin` repositories.
pub const DEFAULT_OWNER: &str = "aredridel";

/// Source repository reference in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Version control system, always `git`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Clone URL.
    pub url: String,
}

/// npm package manifest describing a fetched build.
///
/// Built complete for one flow and never mutated afterwards. Paths always use
/// `/` so the manifest is identical whichever host produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Package name, `{product}-{platform}-{arch}`.
    pub name: String,
    /// Release version.
    pub version: String,
    /// Human description, the product name.
    pub description: String,
    /// Lifecycle scripts. Only the archive flow has a `preinstall`.
    pub scripts: BTreeMap<String, String>,
    /// Executable name to package-relative path.
    pub bin: BTreeMap<String, String>,
    /// Files shipped in the package.
    pub files: Vec<String>,
    /// Where the package sources live.
    pub repository: Repository,
}

impl Descriptor {
    /// Pick the builder matching the request's flow.
    pub fn for_request(req: &Request, owner: &str) -> Self {
        if req.is_windows() {
            Self::direct(req, owner)
        } else {
            Self::archive(req, owner)
        }
    }

    /// Manifest for the tarball flow: unpack on preinstall, run from `bin/`.
    pub fn archive(req: &Request, owner: &str) -> Self {
        let base = req.base_name();
        let archive = req.archive_name();

        let mut bin = BTreeMap::new();
        bin.insert("node".to_string(), format!("{base}/bin/node"));
        if req.is_iojs() {
            bin.insert("iojs".to_string(), format!("{base}/bin/iojs"));
        }

        let mut scripts = BTreeMap::new();
        scripts.insert("preinstall".to_string(), format!("tar xzf {archive}"));

        Self {
            scripts,
            bin,
            files: vec![archive],
            ..Self::common(req, owner)
        }
    }

    /// Manifest for the Windows flow: executables sit at the package root.
    pub fn direct(req: &Request, owner: &str) -> Self {
        let mut bin = BTreeMap::new();
        bin.insert("node".to_string(), "./node.exe".to_string());
        let mut files = vec!["node.exe".to_string(), "node.lib".to_string()];

        if req.is_iojs() {
            bin.insert("iojs".to_string(), "./iojs.exe".to_string());
            files.push("iojs.exe".to_string());
            files.push("iojs.lib".to_string());
        }

        Self {
            bin,
            files,
            ..Self::common(req, owner)
        }
    }

    fn common(req: &Request, owner: &str) -> Self {
        Self {
            name: req.dir_name(),
            version: req.version().to_string(),
            description: req.product().to_string(),
            scripts: BTreeMap::new(),
            bin: BTreeMap::new(),
            files: Vec::new(),
            repository: Repository {
                kind: "git".to_string(),
                url: format!("https://github.com/{owner}/{}-bin", req.product()),
            },
        }
    }

    /// Serialize in the layout of the flow: pretty for Windows, compact otherwise.
    ///
    /// # Errors
    ///
    /// Returns the serializer error.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
