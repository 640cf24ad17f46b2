// Viewport controller - the gesture -> window state machine
use crate::domain::gesture::{Gesture, ZoomSpan};
use crate::domain::window::{
    date_start_ms, day_start, midnight_ms, month_start, shift_days, shift_months, DateWindow,
    Granularity, DAY_MS, HOUR_MS,
};
use chrono::NaiveDate;

/// Padding added around the full data range by the All preset, with a
/// one-hour floor so degenerate spans still render.
const ALL_PAD_FRACTION: f64 = 0.02;
/// Smooth-pan step as a fraction of the current span.
const PAN_FRACTION: f64 = 0.10;
/// Day-regime detection tolerance around an exact 24h span.
const SPAN_TOLERANCE_MS: i64 = 100_000;
/// Month regime covers 28..31-day months with slack on both sides.
const MONTH_REGIME_MIN_MS: i64 = 25 * DAY_MS;
const MONTH_REGIME_MAX_MS: i64 = 35 * DAY_MS;

/// Holds the single current window ("no window" before the first load) and
/// computes the next one for each incoming gesture.
#[derive(Debug, Default)]
pub struct ViewportController {
    window: Option<DateWindow>,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self) -> Option<DateWindow> {
        self.window
    }

    pub fn reset(&mut self) {
        self.window = None;
    }

    /// Run one gesture through the transition function and return the
    /// resulting window. Invalid and out-of-bounds gestures leave the
    /// window unchanged.
    pub fn apply(
        &mut self,
        gesture: Gesture,
        data_bounds: Option<(i64, i64)>,
    ) -> Option<DateWindow> {
        let next = match gesture {
            Gesture::PresetZoom { span } => preset_zoom(span, self.window, data_bounds),
            Gesture::WheelPan { delta } => wheel_pan(delta, self.window, data_bounds),
            Gesture::ClickDrillDown { timestamp_ms } => drill_down(timestamp_ms, self.window),
            Gesture::ExplicitDateSelect { date } => select_date(date),
        };
        match next {
            Some(window) => self.window = Some(window),
            None => tracing::debug!(?gesture, "gesture ignored - window unchanged"),
        }
        self.window
    }
}

/// Preset zoom. The anchor is the midpoint of the current window when one
/// exists, else the last data timestamp; no-op while the store is empty.
fn preset_zoom(
    span: ZoomSpan,
    current: Option<DateWindow>,
    data_bounds: Option<(i64, i64)>,
) -> Option<DateWindow> {
    let (data_min, data_max) = data_bounds?;
    let anchor_ms = current.map(|w| w.midpoint_ms()).unwrap_or(data_max);

    match span {
        ZoomSpan::All => {
            let total_span = data_max - data_min;
            let pad = ((total_span as f64 * ALL_PAD_FRACTION) as i64).max(HOUR_MS);
            Some(DateWindow::new(
                data_min - pad,
                data_max + pad,
                Granularity::Day,
            ))
        }
        ZoomSpan::Month => {
            let start = month_start(anchor_ms)?;
            let end = shift_months(start, 1)?;
            Some(DateWindow::new(
                date_start_ms(start),
                date_start_ms(end),
                Granularity::Day,
            ))
        }
        ZoomSpan::Day => {
            let start_ms = midnight_ms(anchor_ms)?;
            Some(DateWindow::new(
                start_ms,
                start_ms + DAY_MS,
                Granularity::Hour,
            ))
        }
        ZoomSpan::Hours(hours) => {
            if hours <= 0 {
                return None;
            }
            let start_ms = midnight_ms(anchor_ms - hours * HOUR_MS / 2)?;
            Some(DateWindow::new(
                start_ms,
                start_ms + hours * HOUR_MS,
                Granularity::Day,
            ))
        }
    }
}

/// Wheel pan. The span picks the regime: an exact-ish day snaps by calendar
/// days, a month-sized span snaps by calendar months, anything else pans
/// smoothly. A candidate that misses the data entirely is rejected.
fn wheel_pan(
    delta: i32,
    current: Option<DateWindow>,
    data_bounds: Option<(i64, i64)>,
) -> Option<DateWindow> {
    let window = current?;
    let direction = i64::from(delta.signum());
    if direction == 0 {
        return None;
    }
    let span = window.span_ms();

    let candidate = if (span - DAY_MS).abs() < SPAN_TOLERANCE_MS {
        let anchor = day_start(window.start_ms)?;
        let start_ms = date_start_ms(shift_days(anchor, direction)?);
        DateWindow::new(start_ms, start_ms + DAY_MS, window.granularity)
    } else if span > MONTH_REGIME_MIN_MS && span < MONTH_REGIME_MAX_MS {
        let anchor = month_start(window.start_ms)?;
        let start = shift_months(anchor, direction as i32)?;
        let end = shift_months(start, 1)?;
        DateWindow::new(
            date_start_ms(start),
            date_start_ms(end),
            window.granularity,
        )
    } else {
        let shift = (span as f64 * PAN_FRACTION) as i64 * direction;
        DateWindow::new(
            window.start_ms + shift,
            window.end_ms + shift,
            window.granularity,
        )
    };

    if let Some((data_min, data_max)) = data_bounds {
        if !candidate.overlaps(data_min, data_max) {
            return None;
        }
    }
    Some(candidate)
}

/// Drill down from a multi-day view to the clicked day. Only valid while
/// the axis granularity is Day.
fn drill_down(timestamp_ms: i64, current: Option<DateWindow>) -> Option<DateWindow> {
    let window = current?;
    if window.granularity != Granularity::Day {
        return None;
    }
    let start_ms = midnight_ms(timestamp_ms)?;
    Some(DateWindow::new(
        start_ms,
        start_ms + DAY_MS,
        Granularity::Hour,
    ))
}

/// Date-picker selection: the chosen day, hour ticks, regardless of the
/// current window.
fn select_date(date: NaiveDate) -> Option<DateWindow> {
    let start_ms = date_start_ms(date);
    Some(DateWindow::new(
        start_ms,
        start_ms + DAY_MS,
        Granularity::Hour,
    ))
}
