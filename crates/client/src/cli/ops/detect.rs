//! Live overlay demo in the terminal.
//!
//! Runs the real [`OverlayLoop`] against a file-backed frame source and an
//! ASCII surface: the frame is downsampled to a luma character grid and the
//! detected box or landmark markers are composited on top, one render per
//! cycle.

use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use clap::Args;
use image::GenericImageView;

use common::prelude::{DetectMode, FaceBox, Frame, Point};

use crate::overlay::{FrameSource, OverlayLoop, OverlaySurface};

use super::{frame_from_file, FrameLoadError};

const ASCII_RAMP: &[u8] = b" .:-=+*#%@";
const GRID_WIDTH: usize = 72;
const GRID_HEIGHT: usize = 28;

#[derive(Args, Debug, Clone)]
pub struct Detect {
    /// Overlay mode: login (bounding box) or register (landmarks)
    #[arg(long, default_value = "login")]
    pub mode: String,

    /// Path to the captured frame to run detection on
    #[arg(long)]
    pub image: PathBuf,

    /// Stop after this many rendered cycles
    #[arg(long, default_value_t = 30)]
    pub cycles: usize,

    /// Cycle cadence in milliseconds (defaults to the configured cadence)
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

#[derive(Debug)]
pub struct DetectOutput {
    pub cycles: usize,
}

impl fmt::Display for DetectOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay stopped after {} cycles", self.cycles)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error(transparent)]
    Frame(#[from] FrameLoadError),
    #[error(transparent)]
    Mode(#[from] common::detection::ParseDetectModeError),
    #[error("overlay task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Replays one captured frame forever, standing in for a live stream.
struct FileFrameSource {
    frame: Frame,
}

#[async_trait]
impl FrameSource for FileFrameSource {
    async fn next_frame(&self) -> Option<Frame> {
        Some(self.frame.clone())
    }
}

/// Character-grid surface. Scales frame-native coordinates down to the grid
/// so the geometry lands where it would on a canvas.
struct AsciiSurface {
    grid: Vec<Vec<char>>,
    frame_width: u32,
    frame_height: u32,
    presented: Arc<AtomicUsize>,
}

impl AsciiSurface {
    fn new(presented: Arc<AtomicUsize>) -> Self {
        Self {
            grid: vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT],
            frame_width: 0,
            frame_height: 0,
            presented,
        }
    }

    fn to_grid(&self, x: i64, y: i64) -> (usize, usize) {
        let gx = (x.max(0) as u64 * GRID_WIDTH as u64 / self.frame_width.max(1) as u64) as usize;
        let gy = (y.max(0) as u64 * GRID_HEIGHT as u64 / self.frame_height.max(1) as u64) as usize;
        (gx.min(GRID_WIDTH - 1), gy.min(GRID_HEIGHT - 1))
    }
}

impl OverlaySurface for AsciiSurface {
    fn begin_frame(&mut self, frame: &Frame) {
        self.frame_width = frame.width;
        self.frame_height = frame.height;
        self.grid = vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT];

        let Ok(decoded) = image::load_from_memory(frame.bytes()) else {
            return;
        };
        let luma = decoded.to_luma8();
        let (img_w, img_h) = decoded.dimensions();
        for gy in 0..GRID_HEIGHT {
            for gx in 0..GRID_WIDTH {
                let px = (gx as u32 * img_w / GRID_WIDTH as u32).min(img_w.saturating_sub(1));
                let py = (gy as u32 * img_h / GRID_HEIGHT as u32).min(img_h.saturating_sub(1));
                let level = luma.get_pixel(px, py).0[0] as usize * (ASCII_RAMP.len() - 1) / 255;
                self.grid[gy][gx] = ASCII_RAMP[level] as char;
            }
        }
    }

    fn draw_box(&mut self, face: &FaceBox) {
        let (x1, y1) = self.to_grid(face.left, face.top);
        let (x2, y2) = self.to_grid(face.right, face.bottom);
        for gx in x1..=x2 {
            self.grid[y1][gx] = '-';
            self.grid[y2][gx] = '-';
        }
        for row in self.grid.iter_mut().take(y2 + 1).skip(y1) {
            row[x1] = '|';
            row[x2] = '|';
        }
        self.grid[y1][x1] = '+';
        self.grid[y1][x2] = '+';
        self.grid[y2][x1] = '+';
        self.grid[y2][x2] = '+';
    }

    fn draw_landmarks(&mut self, points: &[Point]) {
        for point in points {
            let (gx, gy) = self.to_grid(point.x(), point.y());
            self.grid[gy][gx] = '*';
        }
    }

    fn present(&mut self) {
        let mut out = String::with_capacity(GRID_WIDTH * GRID_HEIGHT + GRID_HEIGHT);
        for row in &self.grid {
            out.extend(row.iter());
            out.push('\n');
        }
        print!("\x1b[2J\x1b[H{out}");
        self.presented.fetch_add(1, Ordering::Relaxed);
    }
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Detect {
    type Error = DetectError;
    type Output = DetectOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mode: DetectMode = self.mode.parse()?;
        let frame = frame_from_file(&self.image)?;
        let interval = Duration::from_millis(
            self.interval_ms
                .unwrap_or(ctx.config.overlay_interval_ms),
        );

        let presented = Arc::new(AtomicUsize::new(0));
        let mut surface = AsciiSurface::new(presented.clone());
        let source = Arc::new(FileFrameSource { frame });
        let detector = Arc::new(ctx.client.clone());

        let (overlay, handle) = OverlayLoop::new(detector, source, mode, interval);
        let task = tokio::spawn(async move { overlay.run(&mut surface).await });

        loop {
            if presented.load(Ordering::Relaxed) >= self.cycles {
                break;
            }
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                _ = tokio::time::sleep(Duration::from_millis(10)) => {}
            }
        }
        handle.stop();
        task.await?;

        Ok(DetectOutput {
            cycles: presented.load(Ordering::Relaxed),
        })
    }
}
