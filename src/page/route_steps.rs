//! Journey checkpoints with exclusive selection and a progress bar.

use crate::models::Coordinates;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub title: String,
    pub description: String,
    pub meta: String,
    /// Steps without a coordinate keep the current map preview.
    pub coordinate: Option<Coordinates>,
    pub zoom: u8,
}

impl RouteStep {
    fn new(title: &str, description: &str, meta: &str, lat: f64, lon: f64, zoom: u8) -> Self {
        RouteStep {
            title: title.to_string(),
            description: description.to_string(),
            meta: meta.to_string(),
            coordinate: Coordinates::new(lat, lon).ok(),
            zoom,
        }
    }
}

/// Seoul to the ice-fishing field, in travel order.
pub fn default_route_steps() -> Vec<RouteStep> {
    vec![
        RouteStep::new(
            "서울 출발",
            "이른 아침 서울에서 출발해 경춘로로 향합니다.",
            "출발 · 07:00 권장",
            37.5278,
            127.0285,
            11,
        ),
        RouteStep::new(
            "춘천 경유",
            "춘천에서 잠시 쉬며 간식과 방한용품을 점검하세요.",
            "약 1시간 20분",
            37.8813,
            127.7298,
            11,
        ),
        RouteStep::new(
            "화천 읍내",
            "읍내에 들어서면 축제 안내 표지를 따라 이동합니다.",
            "약 2시간",
            38.1063,
            127.7063,
            12,
        ),
        RouteStep::new(
            "축제장 도착",
            "주차 후 매표소에서 체험 프로그램을 예약하세요.",
            "주차장 · 셔틀 운행",
            38.1065,
            127.7084,
            13,
        ),
        RouteStep::new(
            "얼음낚시터",
            "얼음 두께가 확인된 구역에서만 낚시를 즐기세요.",
            "화천천 일대",
            38.1012,
            127.7135,
            14,
        ),
    ]
}

/// What the page shows for the active step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStepView {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub meta: String,
    pub progress_percent: u32,
    /// Map preview target, when the step has one.
    pub map_target: Option<(Coordinates, u8)>,
}

#[derive(Debug)]
pub struct RouteStepSelector {
    steps: Vec<RouteStep>,
    active: Option<usize>,
}

impl RouteStepSelector {
    pub fn new(steps: Vec<RouteStep>) -> Self {
        RouteStepSelector {
            steps,
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Select from a control's ordinal attribute. Anything that is not a
    /// valid step number selects the first step.
    pub fn select_ordinal(&mut self, raw: &str) -> Option<RouteStepView> {
        let index = raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|i| *i < self.steps.len())
            .unwrap_or(0);
        self.select(index)
    }

    /// Make `index` the only active step. `None` for an out-of-range index.
    pub fn select(&mut self, index: usize) -> Option<RouteStepView> {
        let step = self.steps.get(index)?;
        self.active = Some(index);

        let total = self.steps.len() as f64;
        let progress_percent = (100.0 * (index + 1) as f64 / total).round() as u32;

        Some(RouteStepView {
            index,
            title: step.title.clone(),
            description: step.description.clone(),
            meta: step.meta.clone(),
            progress_percent,
            map_target: step.coordinate.map(|c| (c, step.zoom)),
        })
    }
}
