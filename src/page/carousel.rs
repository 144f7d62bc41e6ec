//! Photo gallery slider: ordered slides, a wrapping index and an autoplay timer.
//!
//! The carousel itself is synchronous. Autoplay is a deadline on the tokio
//! clock; the page's event loop sleeps until [`Carousel::deadline`] and then
//! calls [`Carousel::on_tick`].

use crate::models::{fallback_images, ImageItem};
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideItem {
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub caption: String,
}

impl From<ImageItem> for SlideItem {
    fn from(item: ImageItem) -> Self {
        SlideItem {
            image_url: item.image,
            thumbnail_url: Some(item.thumbnail).filter(|t| !t.is_empty()),
            caption: item.title,
        }
    }
}

/// Slides shown when a category has no usable results.
pub fn builtin_slides() -> Vec<SlideItem> {
    fallback_images().into_iter().map(SlideItem::from).collect()
}

/// A gallery tab and the image search it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryCategory {
    pub key: String,
    pub label: String,
    pub query: String,
}

impl GalleryCategory {
    fn new(key: &str, label: &str, query: &str) -> Self {
        GalleryCategory {
            key: key.to_string(),
            label: label.to_string(),
            query: query.to_string(),
        }
    }
}

pub fn default_categories() -> Vec<GalleryCategory> {
    vec![
        GalleryCategory::new("festival", "축제 현장", "화천 산천어 축제"),
        GalleryCategory::new("ice-fishing", "얼음낚시", "화천 얼음낚시"),
        GalleryCategory::new("lanterns", "선등거리", "화천 선등거리"),
        GalleryCategory::new("food", "먹거리", "화천 산천어 구이"),
    ]
}

#[derive(Debug, Clone, Copy)]
struct Autoplay {
    next_due: Instant,
}

#[derive(Debug)]
pub struct Carousel {
    slides: Vec<SlideItem>,
    index: usize,
    autoplay: Option<Autoplay>,
    hovered: bool,
    focused: bool,
    interval: Duration,
}

impl Carousel {
    pub fn new(interval: Duration) -> Self {
        Carousel {
            slides: Vec::new(),
            index: 0,
            autoplay: None,
            hovered: false,
            focused: false,
            interval,
        }
    }

    pub fn slides(&self) -> &[SlideItem] {
        &self.slides
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Horizontal offset of the slide strip, in percent of one slide.
    pub fn offset_percent(&self) -> i64 {
        -(self.index as i64) * 100
    }

    /// Discard the current sequence and start over at the first slide.
    pub fn replace(&mut self, slides: Vec<SlideItem>, now: Instant) {
        self.pause();
        self.slides = slides;
        self.index = 0;
        self.resume(now);
    }

    /// Jump to `target`, wrapping in both directions. `None` when empty.
    pub fn go_to(&mut self, target: isize) -> Option<usize> {
        if self.slides.is_empty() {
            return None;
        }
        let len = self.slides.len() as isize;
        self.index = target.rem_euclid(len) as usize;
        Some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.go_to(self.index as isize + 1)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.go_to(self.index as isize - 1)
    }

    /// Stop autoplay. Stopping an absent timer is a no-op.
    pub fn pause(&mut self) {
        self.autoplay = None;
    }

    /// Start autoplay unless it is already running, there is nothing to
    /// rotate, or the pointer/focus is inside the carousel.
    pub fn resume(&mut self, now: Instant) {
        if self.autoplay.is_some() || self.slides.len() <= 1 || self.hovered || self.focused {
            return;
        }
        self.autoplay = Some(Autoplay {
            next_due: now + self.interval,
        });
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.pause();
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.hovered = false;
        self.resume(now);
    }

    pub fn focus_in(&mut self) {
        self.focused = true;
        self.pause();
    }

    pub fn focus_out(&mut self, now: Instant) {
        self.focused = false;
        self.resume(now);
    }

    /// When the autoplay timer next fires, if it is running.
    pub fn deadline(&self) -> Option<Instant> {
        self.autoplay.map(|a| a.next_due)
    }

    /// Advance one slide if the timer is due. Returns the new index when it moved.
    pub fn on_tick(&mut self, now: Instant) -> Option<usize> {
        let autoplay = self.autoplay.as_mut()?;
        if now < autoplay.next_due {
            return None;
        }
        autoplay.next_due = now + self.interval;
        self.next()
    }
}
