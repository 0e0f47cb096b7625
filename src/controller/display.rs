use std::time::Duration;

/// Format a `Duration` as `m:ss`, truncating partial seconds.
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// The time strings and seek indicator last shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDisplay {
    pub current: String,
    pub total: String,
    /// Seek indicator position in percent.
    pub seek_percent: f64,
}

impl Default for TimeDisplay {
    fn default() -> Self {
        Self {
            current: "0:00".to_string(),
            total: "0:00".to_string(),
            seek_percent: 0.0,
        }
    }
}

impl TimeDisplay {
    /// Refresh from the player's position.
    ///
    /// With no usable duration both clocks read `0:00` and the seek
    /// indicator keeps its previous value.
    pub fn update(&mut self, current: Duration, duration: Option<Duration>) {
        match duration.filter(|d| !d.is_zero()) {
            Some(total) => {
                self.current = format_clock(current);
                self.total = format_clock(total);
                self.seek_percent = current.as_secs_f64() / total.as_secs_f64() * 100.0;
            }
            None => {
                self.current = "0:00".to_string();
                self.total = "0:00".to_string();
            }
        }
    }
}
