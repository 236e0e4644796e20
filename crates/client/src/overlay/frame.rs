use async_trait::async_trait;

use common::prelude::Frame;

/// Source of live frames for the overlay loop.
///
/// `None` means the stream is not ready yet (camera warming up, tab
/// backgrounded); the loop skips that cycle silently and tries again.
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn next_frame(&self) -> Option<Frame>;
}
