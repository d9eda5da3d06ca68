//! HTTPS client for the remote service (ESP32 only).
//!
//! Uses the ESP-IDF HTTP client with the built-in certificate bundle.

use super::{check_album_status, is_png, Endpoint, NowPlaying, RemoteError, RemoteService};
use esp_idf_svc::http::client::{Configuration, EspHttpConnection};
use esp_idf_svc::http::Method;
use esp_idf_sys::EspError;
use log::{debug, warn};

/// Upper bound for a `/current` body.
const MAX_JSON_LEN: usize = 4 * 1024;

/// Upper bound for an `/album` body. A 200x200 PNG is well below this.
const MAX_IMAGE_LEN: usize = 160 * 1024;

/// Read chunk size.
const CHUNK_LEN: usize = 512;

/// Blocking client for the remote service.
pub struct RemoteClient {
    service: RemoteService,
}

impl RemoteClient {
    pub fn new(service: RemoteService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &RemoteService {
        &self.service
    }

    /// Fetch and decode `/current`.
    pub fn now_playing(&self) -> Result<NowPlaying, RemoteError> {
        let (status, body) = self.get(Endpoint::Current, "application/json", MAX_JSON_LEN)?;
        if status != 200 {
            return Err(RemoteError::Status(status));
        }
        NowPlaying::from_json(&body)
    }

    /// Fetch `/album` as PNG bytes.
    pub fn album_art(&self) -> Result<Vec<u8>, RemoteError> {
        let (status, body) = self.get(Endpoint::Album, "image/png", MAX_IMAGE_LEN)?;
        check_album_status(status)?;
        if !is_png(&body) {
            return Err(RemoteError::InvalidResponse("album is not a PNG".into()));
        }
        Ok(body)
    }

    fn get(
        &self,
        endpoint: Endpoint,
        accept: &str,
        limit: usize,
    ) -> Result<(u16, Vec<u8>), RemoteError> {
        let url = self.service.url(endpoint);
        debug!("GET {}", url);

        let mut conn = EspHttpConnection::new(&Configuration {
            crt_bundle_attach: Some(esp_idf_sys::esp_crt_bundle_attach),
            ..Default::default()
        })
        .map_err(http_error)?;

        conn.initiate_request(Method::Get, &url, &[("accept", accept)])
            .map_err(http_error)?;
        conn.initiate_response().map_err(http_error)?;
        let status = conn.status();

        let mut body = Vec::new();
        let mut chunk = [0u8; CHUNK_LEN];
        loop {
            let n = conn.read(&mut chunk).map_err(http_error)?;
            if n == 0 {
                break;
            }
            if body.len() + n > limit {
                warn!("{} response exceeds {} bytes", endpoint.path(), limit);
                return Err(RemoteError::InvalidResponse("response too large".into()));
            }
            body.extend_from_slice(&chunk[..n]);
        }

        Ok((status, body))
    }
}

fn http_error(e: EspError) -> RemoteError {
    RemoteError::Http(format!("{:?}", e))
}
