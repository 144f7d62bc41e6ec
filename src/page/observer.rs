//! "Tell me when enough of this region is on screen."
//!
//! The page registers regions with a threshold and reacts to crossings. A
//! host with native visibility callbacks forwards them as
//! [`UiEvent::RegionVisible`](super::UiEvent::RegionVisible); otherwise
//! [`PollingObserver`] works out crossings from scroll positions.

use std::collections::HashMap;

/// A vertical band in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Span {
            top,
            height: height.max(0.0),
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Share of `self` that lies inside `viewport`, in `[0, 1]`.
    pub fn visible_fraction(&self, viewport: &Span) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let overlap = self.bottom().min(viewport.bottom()) - self.top.max(viewport.top);
        (overlap.max(0.0) / self.height).min(1.0)
    }
}

pub trait VisibilityObserver: Send {
    fn observe(&mut self, region: &str, threshold: f32);

    fn unobserve(&mut self, region: &str);

    /// Regions that crossed their threshold after a scroll. Observers with
    /// their own callbacks ignore this.
    fn viewport_changed(&mut self, _viewport: Span) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Debug)]
struct Watch {
    threshold: f32,
    visible: bool,
}

/// Computes crossings from a known layout each time the viewport moves.
#[derive(Debug, Default)]
pub struct PollingObserver {
    layout: HashMap<String, Span>,
    watched: HashMap<String, Watch>,
    order: Vec<String>,
}

impl PollingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style layout registration.
    pub fn with_region(mut self, region: &str, span: Span) -> Self {
        self.set_layout(region, span);
        self
    }

    pub fn set_layout(&mut self, region: &str, span: Span) {
        self.layout.insert(region.to_string(), span);
    }

    pub fn is_observing(&self, region: &str) -> bool {
        self.watched.contains_key(region)
    }

    /// Regions whose visible share rose to their threshold since the last
    /// poll, in registration order.
    pub fn poll(&mut self, viewport: Span) -> Vec<String> {
        let mut crossed = Vec::new();
        for region in &self.order {
            let (Some(watch), Some(span)) = (self.watched.get_mut(region), self.layout.get(region))
            else {
                continue;
            };
            let now_visible = span.visible_fraction(&viewport) >= f64::from(watch.threshold);
            if now_visible && !watch.visible {
                crossed.push(region.clone());
            }
            watch.visible = now_visible;
        }
        crossed
    }
}

impl VisibilityObserver for PollingObserver {
    fn observe(&mut self, region: &str, threshold: f32) {
        let watch = Watch {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        };
        if self.watched.insert(region.to_string(), watch).is_none() {
            self.order.push(region.to_string());
        }
    }

    fn unobserve(&mut self, region: &str) {
        if self.watched.remove(region).is_some() {
            self.order.retain(|r| r != region);
        }
    }

    fn viewport_changed(&mut self, viewport: Span) -> Vec<String> {
        self.poll(viewport)
    }
}
