use rps_core::Clock;
use rps_gesture::Snapshot;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// Inputs for one tick, as delivered by the tracker and the keyboard.
///
/// `t` is seconds since the session started; when absent the caller
/// supplies wall-clock time instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,
    #[serde(default)]
    pub hands: Vec<Snapshot>,
    #[serde(default)]
    pub start: bool,
    #[serde(default)]
    pub quit: bool,
}

impl Frame {
    /// Recorded timestamp, if any. Negative or non-finite values are rejected.
    pub fn clock(&self) -> anyhow::Result<Option<Clock>> {
        self.t
            .map(Duration::try_from_secs_f64)
            .transpose()
            .map_err(|e| anyhow::anyhow!("invalid frame time {:?}: {}", self.t, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_is_optional() {
        let frame = serde_json::from_str::<Frame>("{}").unwrap();
        assert_eq!(frame, Frame::default());
        assert_eq!(frame.clock().unwrap(), None);
    }

    #[test]
    fn seconds_become_clock() {
        let frame = serde_json::from_str::<Frame>(r#"{"t": 1.5, "start": true}"#).unwrap();
        assert!(frame.start);
        assert_eq!(frame.clock().unwrap(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn negative_time_is_rejected() {
        let frame = Frame {
            t: Some(-1.),
            ..Frame::default()
        };
        assert!(frame.clock().is_err());
    }
}
