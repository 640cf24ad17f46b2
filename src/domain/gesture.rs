// User gesture domain model
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A zoom-preset target span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomSpan {
    /// Full data range plus padding.
    All,
    /// The calendar month containing the anchor.
    Month,
    /// The calendar day containing the anchor.
    Day,
    /// An arbitrary span centered on the anchor (week = 168).
    Hours(i64),
}

/// A discrete user-originated gesture, as posted by the render bridge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gesture {
    PresetZoom { span: ZoomSpan },
    WheelPan { delta: i32 },
    ClickDrillDown { timestamp_ms: i64 },
    ExplicitDateSelect { date: NaiveDate },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_wire_format() {
        let json = r#"{"type":"preset_zoom","span":"all"}"#;
        let gesture: Gesture = serde_json::from_str(json).unwrap();
        assert_eq!(gesture, Gesture::PresetZoom { span: ZoomSpan::All });

        let json = r#"{"type":"preset_zoom","span":{"hours":168}}"#;
        let gesture: Gesture = serde_json::from_str(json).unwrap();
        assert_eq!(gesture, Gesture::PresetZoom { span: ZoomSpan::Hours(168) });

        let json = r#"{"type":"wheel_pan","delta":-1}"#;
        let gesture: Gesture = serde_json::from_str(json).unwrap();
        assert_eq!(gesture, Gesture::WheelPan { delta: -1 });

        let json = r#"{"type":"explicit_date_select","date":"2025-12-03"}"#;
        let gesture: Gesture = serde_json::from_str(json).unwrap();
        assert_eq!(
            gesture,
            Gesture::ExplicitDateSelect {
                date: NaiveDate::from_ymd_opt(2025, 12, 3).unwrap()
            }
        );
    }
}
