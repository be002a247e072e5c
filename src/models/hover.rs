use serde::{Deserialize, Serialize};

use super::CalendarMonth;

/// Element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum HoverTarget {
    /// Index into the cash-outflow points.
    Bucket(usize),
    Month(CalendarMonth),
    /// 1-based vendor rank.
    Vendor(usize),
}

/// Viewport position of the hovered element, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub left: f64,
    pub top: f64,
}

/// Pointer-hover state for a single rendered chart.
///
/// Each chart instance owns its own value and hands it to the tooltip
/// builders by reference. It never outlives the interactive session and is
/// cleared on pointer-leave.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    target: Option<HoverTarget>,
    anchor: Option<Anchor>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, target: HoverTarget, anchor: Anchor) {
        self.target = Some(target);
        self.anchor = Some(anchor);
    }

    pub fn leave(&mut self) {
        self.target = None;
        self.anchor = None;
    }

    pub fn target(&self) -> Option<HoverTarget> {
        self.target
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn is_hovered(&self, target: HoverTarget) -> bool {
        self.target == Some(target)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendTooltip {
    pub title: String,
    pub invoice_count: String,
    pub total_spend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorTooltip {
    pub vendor: String,
    pub amount: String,
    pub anchor: Anchor,
}
