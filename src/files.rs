//! File payload interchange: self-describing data URIs.
//!
//! Uploaded assets travel inside the document blob as
//! `data:<media-type>;base64,<body>` strings, so the whole application state
//! round-trips through one key-value store with no separate blob storage.
//! This module owns the encoding and the (fallible) decoding, plus the
//! [`FileDraft`] constructor the presentation layer uses after reading a
//! file's bytes.
//!
//! # Examples
//!
//! ```rust
//! use studioflow::files::{decode_data_uri, encode_data_uri};
//!
//! let uri = encode_data_uri("text/plain", b"script draft");
//! let (media_type, bytes) = decode_data_uri(&uri).unwrap();
//! assert_eq!(media_type, "text/plain");
//! assert_eq!(bytes, b"script draft");
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use miette::Diagnostic;
use thiserror::Error;

use crate::command::FileDraft;

/// Errors from decoding a data URI payload.
#[derive(Debug, Error, Diagnostic)]
pub enum FileError {
    #[error("not a data URI: missing `data:` prefix")]
    #[diagnostic(
        code(studioflow::files::not_data_uri),
        help("File content must be produced by encode_data_uri or an equivalent encoder.")
    )]
    NotDataUri,

    #[error("malformed data URI header: expected `data:<media-type>;base64,<body>`")]
    #[diagnostic(code(studioflow::files::malformed_header))]
    MalformedHeader,

    #[error("base64 body failed to decode: {source}")]
    #[diagnostic(code(studioflow::files::base64))]
    Base64 {
        #[from]
        source: base64::DecodeError,
    },
}

/// Encode raw bytes as a self-describing data URI.
#[must_use]
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

/// Decode a data URI back into its media type and raw bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), FileError> {
    let rest = uri.strip_prefix("data:").ok_or(FileError::NotDataUri)?;
    let (media_type, body) = rest.split_once(";base64,").ok_or(FileError::MalformedHeader)?;
    let bytes = STANDARD.decode(body)?;
    Ok((media_type.to_string(), bytes))
}

impl FileDraft {
    /// Build an upload draft from raw bytes, stamping `last_modified` with
    /// the current time. The engine assigns the id when the draft is applied
    /// via `UploadFile`.
    #[must_use]
    pub fn from_bytes(name: impl Into<String>, media_type: &str, bytes: &[u8]) -> Self {
        FileDraft {
            name: name.into(),
            media_type: media_type.to_string(),
            size: bytes.len() as u64,
            last_modified: Utc::now().timestamp_millis(),
            content: encode_data_uri(media_type, bytes),
        }
    }
}
