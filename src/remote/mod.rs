//! Remote "now playing" service.
//!
//! The configuration table stores only a bare hostname. This module turns it
//! into request URLs and decodes what the service returns:
//!
//! - `GET /current` - JSON describing the track being played
//! - `GET /album` - PNG album cover, [`ALBUM_ART_SIZE`] pixels square, or
//!   `404` when nothing is playing
//!
//! # Example
//!
//! ```
//! use spotiframe_esp32::remote::{Endpoint, RemoteService};
//!
//! let service = RemoteService::new("your-service.onrender.com").unwrap();
//! assert_eq!(
//!     service.url(Endpoint::Current),
//!     "https://your-service.onrender.com/current"
//! );
//! ```

#[cfg(feature = "esp32")]
pub mod client;

use crate::config::{validate_host, ConfigError, NetworkConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the album cover served by `/album`.
pub const ALBUM_ART_SIZE: u32 = 200;

/// PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// URL scheme used to reach the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Https,
    Http,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
        }
    }
}

/// Service endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Track metadata as JSON.
    Current,
    /// Album cover as PNG.
    Album,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Current => "/current",
            Self::Album => "/album",
        }
    }
}

/// Address of the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteService {
    host: String,
    scheme: Scheme,
}

impl RemoteService {
    /// Create a service for a bare `host`.
    ///
    /// Returns an error if the host carries a scheme, a path or a port.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        validate_host(&host)?;
        Ok(Self {
            host,
            scheme: Scheme::default(),
        })
    }

    /// Create a service for the table's `remote_host`.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, ConfigError> {
        Self::new(config.remote_host)
    }

    /// Use `scheme` instead of HTTPS.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Full URL for `endpoint`.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}://{}{}", self.scheme.as_str(), self.host, endpoint.path())
    }
}

/// Response of `GET /current`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NowPlaying {
    /// A track is playing.
    Playing {
        title: String,
        /// Comma-separated artist names.
        artist: String,
        #[serde(default)]
        album_url: Option<String>,
    },
    /// Nothing is playing.
    Stopped,
}

impl NowPlaying {
    /// Decode a `/current` response body.
    pub fn from_json(body: &[u8]) -> Result<Self, RemoteError> {
        serde_json::from_slice(body).map_err(|e| RemoteError::InvalidResponse(e.to_string()))
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    /// Individual artist names.
    pub fn artists(&self) -> impl Iterator<Item = &str> {
        let joined = match self {
            Self::Playing { artist, .. } => artist.as_str(),
            Self::Stopped => "",
        };
        joined
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

impl fmt::Display for NowPlaying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing { title, artist, .. } => write!(f, "{} - {}", artist, title),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// Map an `/album` response status to a result.
pub fn check_album_status(status: u16) -> Result<(), RemoteError> {
    match status {
        200 => Ok(()),
        404 => Err(RemoteError::NoTrack),
        other => Err(RemoteError::Status(other)),
    }
}

/// Check whether `bytes` start with the PNG signature.
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(&PNG_SIGNATURE)
}

/// Errors returned when talking to the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Response body could not be decoded.
    InvalidResponse(String),
    /// Unexpected HTTP status.
    Status(u16),
    /// The service has no track to show.
    NoTrack,
    /// HTTP transport failure.
    Http(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResponse(msg) => write!(f, "invalid response: {}", msg),
            Self::Status(code) => write!(f, "unexpected HTTP status {}", code),
            Self::NoTrack => write!(f, "no track playing"),
            Self::Http(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for RemoteError {}
