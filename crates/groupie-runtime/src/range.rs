// SPDX-License-Identifier: Apache-2.0

//! Two-handle range selector bound to a fixed pixel track.

use serde::Serialize;
use std::fmt;

/// Usable track width in pixels.
pub const TRACK_WIDTH: f64 = 280.0;
/// Half a handle's width; pointer positions are centred on the handle.
pub const HANDLE_OFFSET: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Low,
    High,
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handle::Low => write!(f, "low"),
            Handle::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeOptions {
    pub min: f64,
    pub max: f64,
    pub initial_low: f64,
    pub initial_high: f64,
}

impl Default for RangeOptions {
    fn default() -> Self {
        RangeOptions {
            min: 0.0,
            max: 100.0,
            initial_low: 0.0,
            initial_high: 100.0,
        }
    }
}

/// Change notification emitted whenever a handle moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeChange {
    pub slider_id: String,
    pub low: i64,
    pub high: i64,
}

#[derive(Debug, Clone)]
pub struct RangeSelector {
    id: String,
    min: f64,
    max: f64,
    low_pos: f64,
    high_pos: f64,
}

impl RangeSelector {
    pub fn new(id: impl Into<String>, options: RangeOptions) -> Self {
        let mut selector = RangeSelector {
            id: id.into(),
            min: options.min,
            max: options.max,
            low_pos: 0.0,
            high_pos: TRACK_WIDTH,
        };
        selector.high_pos = selector.position_of(options.initial_high);
        selector.low_pos = selector.position_of(options.initial_low).min(selector.high_pos);
        selector
    }

    /// Handle positions in pixels from the start of the track.
    pub fn positions(&self) -> (f64, f64) {
        (self.low_pos, self.high_pos)
    }

    /// Offset and width of the highlighted span between the handles.
    pub fn fill(&self) -> (f64, f64) {
        (self.low_pos + HANDLE_OFFSET, self.high_pos - self.low_pos)
    }

    pub fn current(&self) -> RangeChange {
        RangeChange {
            slider_id: self.id.clone(),
            low: self.value_at(self.low_pos),
            high: self.value_at(self.high_pos),
        }
    }

    /// Maps a track position back to a rounded value.
    pub fn value_at(&self, pos: f64) -> i64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return self.min.round() as i64;
        }
        ((pos / TRACK_WIDTH) * span + self.min).round() as i64
    }

    /// Whole-pixel track position of `value`, clamped to the track.
    fn position_of(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        ((value - self.min) / span * TRACK_WIDTH)
            .clamp(0.0, TRACK_WIDTH)
            .trunc()
    }

    /// Starts dragging `handle`. The gesture lasts as long as the guard.
    pub fn begin_drag(&mut self, handle: Handle) -> Drag<'_> {
        tracing::trace!(slider = %self.id, %handle, "drag started");
        Drag {
            selector: self,
            handle,
        }
    }
}

/// An active drag gesture on one handle.
///
/// Pointer moves only reach the selector through this guard; dropping it
/// releases the gesture.
#[derive(Debug)]
pub struct Drag<'a> {
    selector: &'a mut RangeSelector,
    handle: Handle,
}

impl Drag<'_> {
    /// Moves the dragged handle under the pointer. Handles never cross.
    pub fn move_to(&mut self, pointer_x: f64, track_left: f64) -> RangeChange {
        let pos = (pointer_x - track_left - HANDLE_OFFSET)
            .clamp(0.0, TRACK_WIDTH)
            .trunc();
        let selector = &mut *self.selector;
        match self.handle {
            Handle::Low => selector.low_pos = pos.min(selector.high_pos),
            Handle::High => selector.high_pos = pos.max(selector.low_pos),
        }
        selector.current()
    }
}

impl Drop for Drag<'_> {
    fn drop(&mut self) {
        tracing::trace!(slider = %self.selector.id, handle = %self.handle, "drag released");
    }
}
