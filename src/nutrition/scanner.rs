// ABOUTME: Nutrition scanner session state tying capture, analysis, and meal history together
// ABOUTME: Analysis runs as an abortable task; clearing the image cancels it without side effects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use super::analyzer::FoodAnalyzer;
use super::history::MealHistory;
use super::image::ImageData;
use crate::capture::{CameraSession, MediaDevices};
use crate::errors::{AppError, AppResult};
use forma_core::models::{MealHistoryEntry, NutritionResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Capture tab shown by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureTab {
    /// Live camera preview
    #[default]
    Camera,
    /// File picker
    Upload,
}

struct PendingAnalysis {
    handle: JoinHandle<AppResult<NutritionResult>>,
    cancelled: bool,
}

impl PendingAnalysis {
    fn cancel(&mut self) {
        self.handle.abort();
        self.cancelled = true;
    }
}

/// Scanner state for one session
///
/// At most one analysis runs at a time. Its result is only published through
/// [`NutritionScanner::complete_analysis`], so a failed or cancelled run never
/// leaves a partial result behind.
pub struct NutritionScanner {
    analyzer: Arc<dyn FoodAnalyzer>,
    tab: CaptureTab,
    camera: Option<CameraSession>,
    image: Option<ImageData>,
    pending: Option<PendingAnalysis>,
    result: Option<NutritionResult>,
    history: MealHistory,
}

impl NutritionScanner {
    /// Scanner backed by `analyzer`
    #[must_use]
    pub fn new(analyzer: Arc<dyn FoodAnalyzer>) -> Self {
        Self {
            analyzer,
            tab: CaptureTab::default(),
            camera: None,
            image: None,
            pending: None,
            result: None,
            history: MealHistory::new(),
        }
    }

    /// Active capture tab
    #[must_use]
    pub const fn tab(&self) -> CaptureTab {
        self.tab
    }

    /// Switch tabs; leaving the camera tab releases the camera
    pub fn set_tab(&mut self, tab: CaptureTab) {
        if tab != CaptureTab::Camera {
            self.release_camera();
        }
        self.tab = tab;
    }

    /// Acquire the camera for the live preview
    ///
    /// On failure the scanner switches to the upload tab and the error is
    /// returned for display.
    ///
    /// # Errors
    ///
    /// Returns `DeviceUnavailable` or `PermissionDenied` if the camera cannot be opened
    pub fn open_camera(&mut self, devices: &dyn MediaDevices) -> AppResult<()> {
        self.release_camera();
        match CameraSession::open(devices) {
            Ok(session) => {
                self.camera = Some(session);
                self.tab = CaptureTab::Camera;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "Could not access camera, switching to upload");
                self.tab = CaptureTab::Upload;
                Err(error.into())
            }
        }
    }

    /// Whether the camera is currently held
    #[must_use]
    pub fn camera_active(&self) -> bool {
        self.camera.as_ref().is_some_and(CameraSession::is_active)
    }

    /// Capture a frame from the open camera and select it
    ///
    /// The camera is released whether or not the capture succeeds. A failed
    /// capture switches the scanner to the upload tab.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the camera is not open, or `DeviceUnavailable`
    /// if no frame could be read
    pub fn capture_photo(&mut self) -> AppResult<&ImageData> {
        let mut session = self
            .camera
            .take()
            .ok_or_else(|| AppError::invalid_state("camera is not open"))?;
        match session.capture() {
            Ok(image) => Ok(self.select_image(image)),
            Err(error) => {
                warn!(%error, "Could not capture photo, switching to upload");
                self.tab = CaptureTab::Upload;
                Err(error.into())
            }
        }
    }

    /// Select an image for analysis, replacing any previous one
    ///
    /// A running analysis of the previous image is cancelled.
    pub fn select_image(&mut self, image: ImageData) -> &ImageData {
        self.cancel_pending();
        self.result = None;
        info!(source = %image.source(), bytes = image.len(), "Image selected for analysis");
        self.image.insert(image)
    }

    /// Selected image, if any
    #[must_use]
    pub const fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// Clear the image and result, cancelling a running analysis
    pub fn clear_image(&mut self) {
        self.cancel_pending();
        self.image = None;
        self.result = None;
    }

    /// Start analyzing the selected image in the background
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is selected or an analysis is already running
    pub fn start_analysis(&mut self) -> AppResult<()> {
        let image = self
            .image
            .clone()
            .ok_or_else(|| AppError::invalid_state("select an image before analyzing"))?;
        if self.is_analyzing() {
            return Err(AppError::invalid_state("analysis is already running"));
        }

        // A finished run that was never completed is superseded
        self.pending = None;
        self.result = None;
        let analyzer = Arc::clone(&self.analyzer);
        let handle = tokio::spawn(async move { analyzer.analyze(&image).await });
        self.pending = Some(PendingAnalysis {
            handle,
            cancelled: false,
        });
        info!("Food analysis started");
        Ok(())
    }

    /// Whether an analysis is still running and has not been cancelled
    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| !p.cancelled && !p.handle.is_finished())
    }

    /// Wait for the running analysis and publish its result
    ///
    /// # Errors
    ///
    /// - `InvalidState` if no analysis was started
    /// - `AnalysisCancelled` if the image was cleared or replaced meanwhile
    /// - `AnalysisFailed` (retryable) if the analyzer failed
    pub async fn complete_analysis(&mut self) -> AppResult<&NutritionResult> {
        let pending = self
            .pending
            .take()
            .ok_or_else(|| AppError::invalid_state("no analysis is running"))?;
        if pending.cancelled {
            return Err(AppError::analysis_cancelled());
        }

        match pending.handle.await {
            Ok(Ok(result)) => {
                info!(food = %result.food_name, "Food analyzed successfully");
                Ok(self.result.insert(result))
            }
            Ok(Err(error)) => {
                warn!(%error, "Food analysis failed");
                Err(AppError::analysis_failed("Could not analyze the image. Please try again.")
                    .with_source(error))
            }
            Err(join_error) if join_error.is_cancelled() => Err(AppError::analysis_cancelled()),
            Err(join_error) => {
                warn!(error = %join_error, "Food analysis task aborted");
                Err(AppError::analysis_failed("Could not analyze the image. Please try again.")
                    .with_source(join_error))
            }
        }
    }

    /// Published result, if any
    #[must_use]
    pub const fn result(&self) -> Option<&NutritionResult> {
        self.result.as_ref()
    }

    /// Save the published result to the meal history and clear the image
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if there is no result to save
    pub fn save_result(&mut self) -> AppResult<&MealHistoryEntry> {
        let result = self
            .result
            .take()
            .ok_or_else(|| AppError::invalid_state("there is no result to save"))?;
        self.clear_image();
        info!(food = %result.food_name, "Nutrition data saved to meal history");
        Ok(self.history.record(result))
    }

    /// Saved meals
    #[must_use]
    pub const fn history(&self) -> &MealHistory {
        &self.history
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            if !pending.cancelled {
                pending.cancel();
                info!("Pending analysis cancelled");
            }
        }
    }

    fn release_camera(&mut self) {
        if let Some(mut session) = self.camera.take() {
            session.release();
        }
    }
}

impl Drop for NutritionScanner {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
