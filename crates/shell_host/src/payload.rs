use std::fs;

use data_encoding::BASE64;
use serde::Serialize;
use shell_core::ResourceRef;
use url::Url;

use crate::PayloadError;

/// Largest file handed to web content.
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

/// A picked file in the shape the page-side bridge turns into a `File`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadPayload {
    pub name: String,
    pub mime: String,
    /// Base64 of the file contents.
    pub data: String,
}

/// Reads the file behind a `file://` reference.
pub fn load_payload(reference: &ResourceRef, max_bytes: u64) -> Result<UploadPayload, PayloadError> {
    let unsupported = || PayloadError::UnsupportedReference(reference.to_string());
    let url = Url::parse(reference.as_str()).map_err(|_| unsupported())?;
    if url.scheme() != "file" {
        return Err(unsupported());
    }
    let path = url.to_file_path().map_err(|_| unsupported())?;

    let len = fs::metadata(&path)?.len();
    if len > max_bytes {
        return Err(PayloadError::TooLarge {
            max_bytes,
            actual: len,
        });
    }
    let bytes = fs::read(&path)?;

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let mime = mime_guess::from_path(&path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(UploadPayload {
        name,
        mime,
        data: BASE64.encode(&bytes),
    })
}
