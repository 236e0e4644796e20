//! Overlay loop scheduling, cancellation, and drawing discipline.
//!
//! These tests swap the HTTP detector and the canvas for instrumented stubs;
//! the loop under test is the real one.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use common::prelude::{DetectMode, Detection, FaceBox, Frame, Point};
use facevault_client::api::ApiError;
use facevault_client::{Detector, FrameSource, OverlayLoop, OverlaySurface};

const TICK: Duration = Duration::from_millis(1);

fn test_frame() -> Frame {
    Frame::new(64, 48, vec![0xffu8; 32])
}

struct StaticFrames {
    ready: AtomicBool,
}

#[async_trait]
impl FrameSource for StaticFrames {
    async fn next_frame(&self) -> Option<Frame> {
        if self.ready.load(Ordering::Relaxed) {
            Some(test_frame())
        } else {
            None
        }
    }
}

impl StaticFrames {
    fn ready() -> Arc<Self> {
        Arc::new(Self {
            ready: AtomicBool::new(true),
        })
    }

    fn not_ready() -> Arc<Self> {
        Arc::new(Self {
            ready: AtomicBool::new(false),
        })
    }
}

#[derive(Default)]
struct StubDetector {
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    /// Signalled when a detect call starts; lets tests catch the loop
    /// mid-request.
    entered: Notify,
    /// When set, detect never resolves on its own.
    hang: AtomicBool,
    fail: AtomicBool,
    detection: Mutex<Detection>,
}

#[async_trait]
impl Detector for StubDetector {
    async fn detect(&self, _frame: &Frame, _mode: DetectMode) -> Result<Detection, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        self.entered.notify_one();

        if self.hang.load(Ordering::SeqCst) {
            // Held open until the future is dropped by cancellation.
            std::future::pending::<()>().await;
        }
        // Simulated network latency, longer than the tick so ticks pile up.
        tokio::time::sleep(Duration::from_millis(5)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApiError::from_status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                String::new(),
            ));
        }
        Ok(self.detection.lock().clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    BeginFrame,
    DrawBox,
    DrawLandmarks,
    Present,
}

#[derive(Clone, Default)]
struct RecordingSurface {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingSurface {
    fn count(&self, event: Event) -> usize {
        self.events.lock().iter().filter(|e| **e == event).count()
    }
}

impl OverlaySurface for RecordingSurface {
    fn begin_frame(&mut self, _frame: &Frame) {
        self.events.lock().push(Event::BeginFrame);
    }

    fn draw_box(&mut self, _face: &FaceBox) {
        self.events.lock().push(Event::DrawBox);
    }

    fn draw_landmarks(&mut self, _points: &[Point]) {
        self.events.lock().push(Event::DrawLandmarks);
    }

    fn present(&mut self) {
        self.events.lock().push(Event::Present);
    }
}

#[tokio::test]
async fn test_at_most_one_detection_in_flight() {
    let detector = Arc::new(StubDetector::default());
    let surface = RecordingSurface::default();
    let mut task_surface = surface.clone();

    let (overlay, handle) =
        OverlayLoop::new(detector.clone(), StaticFrames::ready(), DetectMode::Login, TICK);
    let task = tokio::spawn(async move { overlay.run(&mut task_surface).await });

    tokio::time::sleep(Duration::from_millis(60)).await;
    handle.stop();
    task.await.unwrap();

    assert!(
        detector.calls.load(Ordering::SeqCst) >= 2,
        "loop should have completed several cycles"
    );
    assert_eq!(
        detector.max_in_flight.load(Ordering::SeqCst),
        1,
        "requests must never be pipelined"
    );
}

#[tokio::test]
async fn test_stop_during_in_flight_request_draws_nothing() {
    let detector = Arc::new(StubDetector::default());
    detector.hang.store(true, Ordering::SeqCst);
    detector.detection.lock().face = Some(FaceBox {
        top: 1,
        right: 10,
        bottom: 12,
        left: 2,
    });

    let surface = RecordingSurface::default();
    let mut task_surface = surface.clone();

    let (overlay, handle) =
        OverlayLoop::new(detector.clone(), StaticFrames::ready(), DetectMode::Login, TICK);
    let task = tokio::spawn(async move { overlay.run(&mut task_surface).await });

    // Wait until the loop is parked inside the detector, then tear down.
    detector.entered.notified().await;
    handle.stop();
    task.await.unwrap();

    assert_eq!(surface.count(Event::BeginFrame), 1);
    assert_eq!(surface.count(Event::DrawBox), 0, "no draw after teardown");
    assert_eq!(surface.count(Event::Present), 0);
}

#[tokio::test]
async fn test_unready_stream_skips_cycles_silently() {
    let detector = Arc::new(StubDetector::default());
    let surface = RecordingSurface::default();
    let mut task_surface = surface.clone();

    let (overlay, handle) = OverlayLoop::new(
        detector.clone(),
        StaticFrames::not_ready(),
        DetectMode::Login,
        TICK,
    );
    let task = tokio::spawn(async move { overlay.run(&mut task_surface).await });

    tokio::time::sleep(Duration::from_millis(30)).await;
    handle.stop();
    task.await.unwrap();

    assert_eq!(detector.calls.load(Ordering::SeqCst), 0);
    assert_eq!(surface.count(Event::BeginFrame), 0);
}

#[tokio::test]
async fn test_detector_failure_does_not_stop_the_loop() {
    let detector = Arc::new(StubDetector::default());
    detector.fail.store(true, Ordering::SeqCst);

    let surface = RecordingSurface::default();
    let mut task_surface = surface.clone();

    let (overlay, handle) =
        OverlayLoop::new(detector.clone(), StaticFrames::ready(), DetectMode::Login, TICK);
    let task = tokio::spawn(async move { overlay.run(&mut task_surface).await });

    tokio::time::sleep(Duration::from_millis(60)).await;
    handle.stop();
    task.await.unwrap();

    assert!(
        detector.calls.load(Ordering::SeqCst) >= 2,
        "loop must keep cycling through failures"
    );
    assert_eq!(surface.count(Event::DrawBox), 0);
    assert!(surface.count(Event::Present) >= 2, "frame still painted");
}

#[tokio::test]
async fn test_login_mode_draws_box() {
    let detector = Arc::new(StubDetector::default());
    detector.detection.lock().face = Some(FaceBox {
        top: 5,
        right: 40,
        bottom: 45,
        left: 8,
    });

    let surface = RecordingSurface::default();
    let mut task_surface = surface.clone();

    let (overlay, handle) =
        OverlayLoop::new(detector.clone(), StaticFrames::ready(), DetectMode::Login, TICK);
    let task = tokio::spawn(async move { overlay.run(&mut task_surface).await });

    tokio::time::sleep(Duration::from_millis(40)).await;
    handle.stop();
    task.await.unwrap();

    assert!(surface.count(Event::DrawBox) >= 1);
    assert_eq!(surface.count(Event::DrawLandmarks), 0);
}

#[tokio::test]
async fn test_register_mode_draws_landmarks() {
    let detector = Arc::new(StubDetector::default());
    detector.detection.lock().landmarks = vec![Point(3, 4), Point(9, 12)];

    let surface = RecordingSurface::default();
    let mut task_surface = surface.clone();

    let (overlay, handle) = OverlayLoop::new(
        detector.clone(),
        StaticFrames::ready(),
        DetectMode::Register,
        TICK,
    );
    let task = tokio::spawn(async move { overlay.run(&mut task_surface).await });

    tokio::time::sleep(Duration::from_millis(40)).await;
    handle.stop();
    task.await.unwrap();

    assert!(surface.count(Event::DrawLandmarks) >= 1);
    assert_eq!(surface.count(Event::DrawBox), 0);
}

#[tokio::test]
async fn test_empty_detection_paints_frame_without_geometry() {
    let detector = Arc::new(StubDetector::default());

    let surface = RecordingSurface::default();
    let mut task_surface = surface.clone();

    let (overlay, handle) =
        OverlayLoop::new(detector.clone(), StaticFrames::ready(), DetectMode::Login, TICK);
    let task = tokio::spawn(async move { overlay.run(&mut task_surface).await });

    tokio::time::sleep(Duration::from_millis(40)).await;
    handle.stop();
    task.await.unwrap();

    assert!(surface.count(Event::BeginFrame) >= 1);
    assert!(surface.count(Event::Present) >= 1);
    assert_eq!(surface.count(Event::DrawBox), 0);
    assert_eq!(surface.count(Event::DrawLandmarks), 0);
}
