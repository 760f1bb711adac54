// ABOUTME: Camera capture as a scoped device acquisition with file upload fallback
// ABOUTME: Media device traits, a release-once session guard, and capture outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Camera capture
//!
//! Opening a [`VideoInput`] acquires the device; a [`CameraSession`] owns it and
//! releases it exactly once, whether the session ends by capturing a frame,
//! by an explicit [`CameraSession::release`], or by being dropped (tab switch
//! or teardown). Capture is never guaranteed: [`capture_or_fallback`] turns any
//! device failure into [`CaptureOutcome::FallbackToUpload`].

use crate::errors::{AppError, ErrorCode};
use crate::nutrition::{ImageData, ImageSource};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Mime type of captured frames
pub const FRAME_MIME_TYPE: &str = "image/jpeg";

/// Camera failures; none of them are fatal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// No video input device is present
    #[error("no camera was found")]
    NotFound,
    /// The user or platform refused access
    #[error("camera access was denied")]
    PermissionDenied,
    /// Another application holds the device
    #[error("the camera is in use by another application")]
    Busy,
    /// The device was acquired but did not produce a usable frame
    #[error("could not read a frame: {0}")]
    Frame(String),
}

impl From<CaptureError> for AppError {
    fn from(error: CaptureError) -> Self {
        let code = match error {
            CaptureError::PermissionDenied => ErrorCode::PermissionDenied,
            CaptureError::NotFound | CaptureError::Busy | CaptureError::Frame(_) => {
                ErrorCode::DeviceUnavailable
            }
        };
        Self::new(code, error.to_string())
    }
}

/// An acquired video input device
pub trait VideoInput: Send {
    /// Read one encoded frame
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::Frame` if no frame could be read
    fn read_frame(&mut self) -> Result<Vec<u8>, CaptureError>;

    /// Release the device
    fn release(&mut self);

    /// Human readable device label
    fn label(&self) -> &str {
        "camera"
    }
}

/// Platform media device access
pub trait MediaDevices {
    /// Acquire the default video input
    ///
    /// # Errors
    ///
    /// Returns a `CaptureError` if no device is available or access is refused
    fn open_video_input(&self) -> Result<Box<dyn VideoInput>, CaptureError>;
}

/// Owns an acquired video input and releases it exactly once
pub struct CameraSession {
    input: Option<Box<dyn VideoInput>>,
}

impl CameraSession {
    /// Acquire the default camera
    ///
    /// # Errors
    ///
    /// Returns the device error if the camera cannot be opened
    pub fn open(devices: &dyn MediaDevices) -> Result<Self, CaptureError> {
        let input = devices.open_video_input()?;
        info!(device = input.label(), "Camera acquired");
        Ok(Self { input: Some(input) })
    }

    /// Whether the device is still held
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.input.is_some()
    }

    /// Read one frame, then release the device
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::Frame` if the session was already released or
    /// the frame could not be read; the device is released either way
    pub fn capture(&mut self) -> Result<ImageData, CaptureError> {
        let frame = match self.input.as_mut() {
            Some(input) => input.read_frame(),
            None => Err(CaptureError::Frame("camera was already released".to_owned())),
        };
        self.release();

        let bytes = frame?;
        ImageData::new(bytes, FRAME_MIME_TYPE, ImageSource::Camera)
            .map_err(|e| CaptureError::Frame(e.message))
    }

    /// Release the device; later calls are no-ops
    pub fn release(&mut self) {
        if let Some(mut input) = self.input.take() {
            input.release();
            info!(device = input.label(), "Camera released");
        }
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraSession")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Result of a capture attempt
#[derive(Debug)]
pub enum CaptureOutcome {
    /// A frame was captured
    Captured(ImageData),
    /// The camera could not be used; the user should upload a file instead
    FallbackToUpload(CaptureError),
}

impl CaptureOutcome {
    /// The captured image, if any
    #[must_use]
    pub fn into_image(self) -> Option<ImageData> {
        match self {
            Self::Captured(image) => Some(image),
            Self::FallbackToUpload(_) => None,
        }
    }

    /// Whether the caller should offer file upload
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::FallbackToUpload(_))
    }
}

/// Open the camera, capture one frame, and release it; fall back on any failure
pub fn capture_or_fallback(devices: &dyn MediaDevices) -> CaptureOutcome {
    let result = CameraSession::open(devices).and_then(|mut session| session.capture());
    match result {
        Ok(image) => {
            debug!(bytes = image.len(), "Frame captured");
            CaptureOutcome::Captured(image)
        }
        Err(error) => {
            warn!(%error, "Camera unavailable, falling back to upload");
            CaptureOutcome::FallbackToUpload(error)
        }
    }
}
