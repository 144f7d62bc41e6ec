//! Horizontal scroll position of the video recommendation strip.

use crate::constants::VIDEO_TRACK_SCROLL_FRACTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Prev,
    Next,
}

/// Which of the two scroll buttons are usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackControls {
    pub can_prev: bool,
    pub can_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VideoTrack {
    offset: f64,
    viewport: f64,
    content: f64,
}

impl VideoTrack {
    pub fn new(viewport: f64, content: f64) -> Self {
        VideoTrack {
            offset: 0.0,
            viewport: viewport.max(0.0),
            content: content.max(0.0),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn max_offset(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }

    /// New content or a resized viewport. The offset is kept within bounds.
    pub fn resize(&mut self, viewport: f64, content: f64) -> TrackControls {
        self.viewport = viewport.max(0.0);
        self.content = content.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset());
        self.controls()
    }

    /// Scroll by a fraction of the visible width.
    pub fn scroll(&mut self, direction: ScrollDirection) -> TrackControls {
        let step = self.viewport * VIDEO_TRACK_SCROLL_FRACTION;
        let target = match direction {
            ScrollDirection::Prev => self.offset - step,
            ScrollDirection::Next => self.offset + step,
        };
        self.offset = target.clamp(0.0, self.max_offset());
        self.controls()
    }

    pub fn controls(&self) -> TrackControls {
        TrackControls {
            can_prev: self.offset > 0.0,
            can_next: self.offset < self.max_offset(),
        }
    }
}
