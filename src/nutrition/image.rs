// ABOUTME: Normalized image buffer shared by camera capture and file upload
// ABOUTME: Raw bytes plus mime type and source, with base64 data URL conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use crate::errors::{AppError, AppResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// Frame captured from a live video input
    Camera,
    /// File picked by the user
    Upload,
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera => f.write_str("camera"),
            Self::Upload => f.write_str("upload"),
        }
    }
}

/// Image bytes handed to the food analyzer
///
/// Camera frames and uploads are both normalized to this representation
/// before analysis.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData {
    bytes: Vec<u8>,
    mime_type: String,
    source: ImageSource,
}

impl ImageData {
    /// Wrap raw image bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `bytes` is empty or the mime type is not an image type
    pub fn new(
        bytes: impl Into<Vec<u8>>,
        mime_type: impl Into<String>,
        source: ImageSource,
    ) -> AppResult<Self> {
        let bytes = bytes.into();
        let mime_type = mime_type.into();
        if bytes.is_empty() {
            return Err(AppError::invalid_input("image is empty"));
        }
        if !mime_type.starts_with("image/") {
            return Err(AppError::invalid_input(format!(
                "unsupported mime type '{mime_type}'"
            )));
        }
        Ok(Self {
            bytes,
            mime_type,
            source,
        })
    }

    /// Decode a `data:<mime>;base64,<payload>` URL
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the URL is not a base64 image data URL or decodes to nothing
    pub fn from_data_url(url: &str, source: ImageSource) -> AppResult<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| AppError::invalid_input("not a data URL"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| AppError::invalid_input("data URL has no payload"))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| AppError::invalid_input("data URL is not base64 encoded"))?;

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| AppError::invalid_input("invalid base64 payload").with_source(e))?;
        Self::new(bytes, mime_type, source)
    }

    /// Encode as a base64 data URL
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    /// Raw bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mime type, e.g. `image/jpeg`
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Capture source
    #[must_use]
    pub const fn source(&self) -> ImageSource {
        self.source
    }

    /// Size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; empty images are rejected on construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("len", &self.bytes.len())
            .field("mime_type", &self.mime_type)
            .field("source", &self.source)
            .finish()
    }
}
