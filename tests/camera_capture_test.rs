// ABOUTME: Integration tests for camera capture and the scanner's camera tab
// ABOUTME: Device release on every exit path and fallback to file upload on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use forma::capture::{
    capture_or_fallback, CameraSession, CaptureError, CaptureOutcome, MediaDevices, VideoInput,
    FRAME_MIME_TYPE,
};
use forma::errors::{AppError, ErrorCode};
use forma::nutrition::{CaptureTab, ImageSource, MockFoodAnalyzer, NutritionScanner};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy)]
enum Behavior {
    Works,
    Denied,
    Missing,
    Busy,
    BrokenFrames,
}

struct FakeDevices {
    behavior: Behavior,
    opened: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl FakeDevices {
    fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            opened: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

struct FakeInput {
    broken: bool,
    released: Arc<AtomicUsize>,
}

impl VideoInput for FakeInput {
    fn read_frame(&mut self) -> Result<Vec<u8>, CaptureError> {
        if self.broken {
            Err(CaptureError::Frame("stream ended".into()))
        } else {
            Ok(vec![0xff, 0xd8, 0xff, 0xe0])
        }
    }

    fn release(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }

    fn label(&self) -> &str {
        "fake front camera"
    }
}

impl MediaDevices for FakeDevices {
    fn open_video_input(&self) -> Result<Box<dyn VideoInput>, CaptureError> {
        match self.behavior {
            Behavior::Denied => Err(CaptureError::PermissionDenied),
            Behavior::Missing => Err(CaptureError::NotFound),
            Behavior::Busy => Err(CaptureError::Busy),
            Behavior::Works | Behavior::BrokenFrames => {
                self.opened.fetch_add(1, Ordering::SeqCst);
                Ok(Box::new(FakeInput {
                    broken: matches!(self.behavior, Behavior::BrokenFrames),
                    released: Arc::clone(&self.released),
                }))
            }
        }
    }
}

#[test]
fn test_capture_releases_device() {
    common::init_test_logging();
    let devices = FakeDevices::new(Behavior::Works);

    let outcome = capture_or_fallback(&devices);
    assert!(!outcome.is_fallback());
    let image = outcome.into_image().unwrap();
    assert_eq!(image.source(), ImageSource::Camera);
    assert_eq!(image.mime_type(), FRAME_MIME_TYPE);
    assert_eq!(image.bytes(), &[0xff_u8, 0xd8, 0xff, 0xe0]);

    assert_eq!(devices.opened(), 1);
    assert_eq!(devices.released(), 1);
}

#[test]
fn test_unavailable_camera_falls_back_to_upload() {
    for (behavior, expected) in [
        (Behavior::Denied, CaptureError::PermissionDenied),
        (Behavior::Missing, CaptureError::NotFound),
        (Behavior::Busy, CaptureError::Busy),
    ] {
        let devices = FakeDevices::new(behavior);
        match capture_or_fallback(&devices) {
            CaptureOutcome::FallbackToUpload(reason) => assert_eq!(reason, expected),
            CaptureOutcome::Captured(_) => panic!("capture should have failed"),
        }
        assert_eq!(devices.released(), 0);
    }
}

#[test]
fn test_broken_frame_still_releases() {
    let devices = FakeDevices::new(Behavior::BrokenFrames);
    let outcome = capture_or_fallback(&devices);
    assert!(outcome.is_fallback());
    assert!(outcome.into_image().is_none());
    assert_eq!(devices.released(), 1);
}

#[test]
fn test_session_releases_exactly_once() {
    let devices = FakeDevices::new(Behavior::Works);
    {
        let mut session = CameraSession::open(&devices).unwrap();
        assert!(session.is_active());
        session.release();
        session.release();
        assert!(!session.is_active());
    }
    assert_eq!(devices.released(), 1);

    {
        let _session = CameraSession::open(&devices).unwrap();
    }
    assert_eq!(devices.released(), 2);

    let mut session = CameraSession::open(&devices).unwrap();
    session.capture().unwrap();
    let error = session.capture().unwrap_err();
    assert!(matches!(error, CaptureError::Frame(_)));
    drop(session);
    assert_eq!(devices.released(), 3);
}

#[test]
fn test_capture_errors_map_to_app_errors() {
    assert_eq!(
        AppError::from(CaptureError::PermissionDenied).code,
        ErrorCode::PermissionDenied
    );
    let busy = AppError::from(CaptureError::Busy);
    assert_eq!(busy.code, ErrorCode::DeviceUnavailable);
    assert!(busy.is_retryable());
}

#[test]
fn test_scanner_falls_back_to_upload_tab() {
    let devices = FakeDevices::new(Behavior::Denied);
    let mut scanner = NutritionScanner::new(Arc::new(MockFoodAnalyzer::default()));
    assert_eq!(scanner.tab(), CaptureTab::Camera);

    let error = scanner.open_camera(&devices).unwrap_err();
    assert_eq!(error.code, ErrorCode::PermissionDenied);
    assert_eq!(scanner.tab(), CaptureTab::Upload);
    assert!(!scanner.camera_active());
}

#[test]
fn test_switching_tabs_releases_camera() {
    let devices = FakeDevices::new(Behavior::Works);
    let mut scanner = NutritionScanner::new(Arc::new(MockFoodAnalyzer::default()));

    scanner.open_camera(&devices).unwrap();
    assert!(scanner.camera_active());
    scanner.set_tab(CaptureTab::Upload);
    assert!(!scanner.camera_active());
    assert_eq!(devices.released(), 1);

    scanner.set_tab(CaptureTab::Camera);
    scanner.open_camera(&devices).unwrap();
    drop(scanner);
    assert_eq!(devices.released(), 2);
}

#[test]
fn test_scanner_capture_selects_photo() {
    let devices = FakeDevices::new(Behavior::Works);
    let mut scanner = NutritionScanner::new(Arc::new(MockFoodAnalyzer::default()));

    assert_eq!(
        scanner.capture_photo().unwrap_err().code,
        ErrorCode::InvalidState
    );

    scanner.open_camera(&devices).unwrap();
    let image = scanner.capture_photo().unwrap();
    assert_eq!(image.source(), ImageSource::Camera);
    assert!(!scanner.camera_active());
    assert!(scanner.image().is_some());
    assert_eq!(devices.released(), 1);
}

#[test]
fn test_failed_capture_falls_back_to_upload_tab() {
    let devices = FakeDevices::new(Behavior::BrokenFrames);
    let mut scanner = NutritionScanner::new(Arc::new(MockFoodAnalyzer::default()));

    scanner.open_camera(&devices).unwrap();
    assert_eq!(scanner.tab(), CaptureTab::Camera);

    let error = scanner.capture_photo().unwrap_err();
    assert_eq!(error.code, ErrorCode::DeviceUnavailable);
    assert_eq!(scanner.tab(), CaptureTab::Upload);
    assert!(!scanner.camera_active());
    assert!(scanner.image().is_none());
    assert_eq!(devices.released(), 1);
}
