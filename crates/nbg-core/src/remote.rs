//! Where each release artifact lives on the distribution servers.

use crate::request::Request;

/// Files fetched, in order, for the direct-file flow.
pub const DIRECT_FILES: [&str; 2] = ["node.exe", "node.lib"];

/// Default distribution server for `node`.
pub const NODE_DIST: &str = "https://nodejs.org";

/// Default distribution server for `iojs`.
pub const IOJS_DIST: &str = "https://iojs.org";

/// Base URLs of the distribution servers, one per product lineage.
///
/// Anything that is not `iojs` is served from the node server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mirrors {
    /// Base URL for `node` (and any other product).
    pub node: String,
    /// Base URL for `iojs`.
    pub iojs: String,
}

impl Default for Mirrors {
    fn default() -> Self {
        Self {
            node: NODE_DIST.to_string(),
            iojs: IOJS_DIST.to_string(),
        }
    }
}

impl Mirrors {
    /// Server hosting the request's product.
    pub fn base_for(&self, req: &Request) -> &str {
        let base = if req.is_iojs() { &self.iojs } else { &self.node };
        base.trim_end_matches('/')
    }

    /// Absolute URL of `path` (as returned by [`archive_path`] or [`direct_path`]).
    pub fn url(&self, req: &Request, path: &str) -> String {
        format!("{}{path}", self.base_for(req))
    }
}

/// Server path of the release tarball.
pub fn archive_path(req: &Request) -> String {
    format!("/dist/v{}/{}", req.version(), req.archive_name())
}

/// Server path of one Windows binary or import library.
///
/// iojs keeps them under `win{arch}/`; node ships x86 at the release root and
/// everything else under `x64/`.
pub fn direct_path(req: &Request, filename: &str) -> String {
    let version = req.version();
    if req.is_iojs() {
        format!("/dist/v{version}/win{}/{filename}", req.arch())
    } else if req.arch() == "x86" {
        format!("/dist/v{version}/{filename}")
    } else {
        format!("/dist/v{version}/x64/{filename}")
    }
}
