//! Download a release into its package directory and write the manifest.
//!
//! Every step runs strictly in order and the first failure aborts the rest.
//! Nothing is cleaned up on failure: files already written stay on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::{Client, StatusCode, redirect};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::Reporter;
use crate::descriptor::{DEFAULT_OWNER, Descriptor};
use crate::remote::{self, DIRECT_FILES, Mirrors};
use crate::request::Request;

/// Name of the manifest written after all artifacts are on disk.
pub const MANIFEST_FILE: &str = "package.json";

/// Why a fetch stopped. Every variant is fatal; nothing is retried.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The package directory could not be created and did not already exist.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// Connecting to the server or reading the body failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with anything other than 200.
    #[error("not ok: {status} for {url}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Writing an artifact or the manifest failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The manifest could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// HTTP client for distribution servers.
///
/// Redirects are not followed: anything but a 200 is a failed download.
///
/// # Errors
///
/// Returns [`FetchError::Http`] if the TLS backend fails to initialize.
pub fn http_client() -> Result<Client, FetchError> {
    Ok(Client::builder()
        .user_agent(crate::USER_AGENT)
        .redirect(redirect::Policy::none())
        .build()?)
}

/// What a successful fetch left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// The package directory.
    pub dir: PathBuf,
    /// Downloaded artifacts, in download order.
    pub files: Vec<PathBuf>,
    /// The written `package.json`.
    pub manifest: PathBuf,
}

/// Fetches one [`Request`] into `{out_dir}/{product}-{platform}-{arch}`.
#[derive(Debug)]
pub struct Fetcher<R: Reporter> {
    client: Client,
    mirrors: Mirrors,
    out_dir: PathBuf,
    owner: String,
    reporter: R,
}

impl<R: Reporter> Fetcher<R> {
    /// Fetcher writing below `out_dir`, crediting the default repository owner.
    pub fn new(client: Client, mirrors: Mirrors, out_dir: impl Into<PathBuf>, reporter: R) -> Self {
        Self {
            client,
            mirrors,
            out_dir: out_dir.into(),
            owner: DEFAULT_OWNER.to_string(),
            reporter,
        }
    }

    /// Override the GitHub account named in the manifest's repository URL.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Download every artifact of `req` and write its manifest.
    ///
    /// # Errors
    ///
    /// Fails on the first directory, transport, status or write error. The
    /// manifest is only written once all downloads have succeeded.
    pub async fn fetch(&self, req: &Request) -> Result<FetchOutcome, FetchError> {
        let descriptor = Descriptor::for_request(req, &self.owner);
        let dir = self.out_dir.join(req.dir_name());
        create_dir(&dir).await?;

        let mut files = Vec::new();
        if req.is_windows() {
            for filename in DIRECT_FILES {
                let url = self.mirrors.url(req, &remote::direct_path(req, filename));
                files.push(self.download(&url, &dir, filename).await?);
            }
        } else {
            let archive = req.archive_name();
            let url = self.mirrors.url(req, &remote::archive_path(req));
            files.push(self.download(&url, &dir, &archive).await?);
        }

        let manifest = dir.join(MANIFEST_FILE);
        let json = descriptor.to_json(req.is_windows())?;
        tokio::fs::write(&manifest, json)
            .await
            .map_err(|source| FetchError::Write {
                path: manifest.clone(),
                source,
            })?;
        info!(manifest = %manifest.display(), "wrote manifest");

        Ok(FetchOutcome {
            dir,
            files,
            manifest,
        })
    }

    /// GET `url` and stream the body to `{dir}/{filename}`.
    ///
    /// The response status is checked before the file is created.
    async fn download(&self, url: &str, dir: &Path, filename: &str) -> Result<PathBuf, FetchError> {
        debug!(%url, "GET");
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                self.reporter.failed(filename, &e.to_string());
                return Err(e.into());
            }
        };

        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            self.reporter.failed(filename, &format!("HTTP {status}"));
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let dest = dir.join(filename);
        let write_err = |source: std::io::Error| {
            self.reporter.failed(filename, &source.to_string());
            FetchError::Write {
                path: dest.clone(),
                source,
            }
        };

        let total = response.content_length();
        let mut file = File::create(&dest).await.map_err(write_err)?;
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        self.reporter.downloading(filename, 0, total);
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.inspect_err(|e| self.reporter.failed(filename, &e.to_string()))?;
            file.write_all(&chunk).await.map_err(write_err)?;
            downloaded += chunk.len() as u64;
            self.reporter.downloading(filename, downloaded, total);
        }
        file.flush().await.map_err(write_err)?;

        self.reporter.done(filename, downloaded);
        Ok(dest)
    }
}

/// Create the package directory; an existing one is reused as is.
async fn create_dir(dir: &Path) -> Result<(), FetchError> {
    match tokio::fs::create_dir(dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(dir = %dir.display(), "reusing existing directory");
            Ok(())
        }
        Err(source) => Err(FetchError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
