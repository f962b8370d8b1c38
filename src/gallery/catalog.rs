// SPDX-License-Identifier: MPL-2.0
//! Media catalog fetched from the gallery listing endpoint.
//!
//! The endpoint answers a single GET with `{ "files": [...] }`. Each file
//! carries a name and/or an explicit path, and optionally an explicit media
//! kind; the kind is inferred from the file extension when absent. The
//! catalog is immutable once fetched and is never refetched within a
//! session.

use crate::error::{GalleryError, Result};
use serde::Deserialize;

/// Kind of a gallery media asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Infers the kind from a file extension. Unknown extensions are
    /// treated as images, matching the listing endpoint's convention.
    pub fn from_extension(path: &str) -> Self {
        let extension = path.rsplit('.').next().unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "mp4" | "webm" => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "video" => Some(MediaKind::Video),
            "image" => Some(MediaKind::Image),
            _ => None,
        }
    }
}

/// One resolved catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    /// Source path or URL of the asset.
    pub path: String,
    pub kind: MediaKind,
}

impl MediaEntry {
    /// Human caption derived from the file name: the stem with `-` and `_`
    /// mapped to spaces.
    pub fn caption(&self) -> String {
        let file_name = self.path.rsplit('/').next().unwrap_or(&self.path);
        let stem = file_name.split('.').next().unwrap_or(file_name);
        stem.replace(['-', '_'], " ")
    }
}

/// Raw listing entry as the endpoint serves it.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    files: Vec<ListingFile>,
}

/// Resolves a raw listing file against the media base path. Entries with
/// neither a path nor a name are skipped.
fn resolve(file: &ListingFile, media_base: &str) -> Option<MediaEntry> {
    let path = match (&file.path, &file.name) {
        (Some(path), _) => path.clone(),
        (None, Some(name)) => format!("{}{}", media_base, name),
        (None, None) => return None,
    };
    let kind = file
        .kind
        .as_deref()
        .and_then(MediaKind::from_label)
        .unwrap_or_else(|| MediaKind::from_extension(&path));
    Some(MediaEntry { path, kind })
}

/// Parses a listing body into catalog entries, preserving listing order.
pub fn parse_listing(body: &str, media_base: &str) -> Result<Vec<MediaEntry>> {
    let listing: Listing = serde_json::from_str(body)
        .map_err(|e| GalleryError::MalformedListing(e.to_string()))?;
    Ok(listing
        .files
        .iter()
        .filter_map(|file| resolve(file, media_base))
        .collect())
}

/// Fetches the catalog from the listing endpoint. A non-success status is
/// an error; the caller shows the inline error panel and leaves the catalog
/// empty. No timeout is applied: a stalled request only stalls the loading
/// indicator.
pub async fn fetch_catalog(
    client: &reqwest::Client,
    url: &str,
    media_base: &str,
) -> Result<Vec<MediaEntry>> {
    let response = client
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| GalleryError::Unreachable(e.to_string()))?;

    if !response.status().is_success() {
        return Err(GalleryError::BadStatus(response.status().as_u16()).into());
    }

    let body = response
        .text()
        .await
        .map_err(|e| GalleryError::Unreachable(e.to_string()))?;
    parse_listing(&body, media_base)
}
