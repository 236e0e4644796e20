//! Live detection overlay loop.
//!
//! Repeatedly snapshots a frame, asks the detector for geometry, and draws
//! the result over the frame. Cycles are strictly sequential: the next one
//! is scheduled only after the current request settles, so at most one
//! detection is ever in flight and stale results can never overtake fresh
//! ones. Detection failures are logged and skipped; the loop self-heals on
//! the next cycle.
//!
//! The loop is advisory UI feedback only. The authoritative face match
//! happens server-side during the auth exchange.

mod frame;
mod surface;

pub use frame::FrameSource;
pub use surface::OverlaySurface;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

use common::prelude::{DetectMode, Detection, Frame};

use crate::api::ApiError;

/// One detection exchange per overlay cycle. Implemented for
/// [`crate::ApiClient`]; tests substitute stubs.
#[async_trait]
pub trait Detector: Send + Sync {
    async fn detect(&self, frame: &Frame, mode: DetectMode) -> Result<Detection, ApiError>;
}

/// Stops an [`OverlayLoop`], including one that is mid-request.
///
/// Dropping every clone of the handle also stops the loop, so tying the
/// handle's lifetime to the owning view gives teardown cancellation for
/// free.
#[derive(Debug, Clone)]
pub struct OverlayHandle {
    stop_tx: Arc<watch::Sender<bool>>,
}

impl OverlayHandle {
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }
}

pub struct OverlayLoop {
    detector: Arc<dyn Detector>,
    frames: Arc<dyn FrameSource>,
    mode: DetectMode,
    interval: Duration,
    stop_rx: watch::Receiver<bool>,
}

impl OverlayLoop {
    /// Default cadence, roughly one cycle per display refresh at 30 fps.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(33);

    pub fn new(
        detector: Arc<dyn Detector>,
        frames: Arc<dyn FrameSource>,
        mode: DetectMode,
        interval: Duration,
    ) -> (Self, OverlayHandle) {
        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = OverlayHandle {
            stop_tx: Arc::new(stop_tx),
        };
        (
            Self {
                detector,
                frames,
                mode,
                interval,
                stop_rx,
            },
            handle,
        )
    }

    /// Run until stopped. The stop signal is honored between cycles and
    /// while a request is in flight; an abandoned in-flight result is
    /// discarded without touching the surface.
    pub async fn run<S: OverlaySurface>(mut self, surface: &mut S) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.stop_rx.changed() => break,
                _ = ticker.tick() => {}
            }
            if *self.stop_rx.borrow() {
                break;
            }

            // Stream not ready: skip this cycle without error.
            let Some(frame) = self.frames.next_frame().await else {
                continue;
            };

            surface.begin_frame(&frame);

            let detection = tokio::select! {
                _ = self.stop_rx.changed() => {
                    tracing::debug!("overlay stopped mid-request, discarding result");
                    return;
                }
                result = self.detector.detect(&frame, self.mode) => result,
            };

            match detection {
                Ok(detection) => self.draw(surface, &detection),
                Err(err) => {
                    // Advisory only: log, draw nothing, keep going.
                    tracing::warn!(%err, "detection request failed");
                }
            }

            surface.present();
        }
        tracing::debug!("overlay loop stopped");
    }

    fn draw<S: OverlaySurface>(&self, surface: &mut S, detection: &Detection) {
        match self.mode {
            DetectMode::Login => {
                // Absence of a box is not an error; nothing to draw.
                if let Some(face) = &detection.face {
                    surface.draw_box(face);
                }
            }
            DetectMode::Register => {
                if !detection.landmarks.is_empty() {
                    surface.draw_landmarks(&detection.landmarks);
                }
            }
        }
    }
}
