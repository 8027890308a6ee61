//! Launch countdown formatter
//!
//! Pure millisecond-timestamp math; the host samples the wall clock once a
//! second and writes the parts into the page.

use crate::consts::LAUNCH_OFFSET_DAYS;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Whole days/hours/minutes/seconds remaining until launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeParts {
    /// Two-digit zero-padded rendering of one part, as shown on the page
    pub fn padded(value: i64) -> String {
        format!("{:02}", value)
    }
}

/// Countdown state at a sampled instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    Counting(TimeParts),
    /// Target instant has passed
    Live,
}

/// A fixed launch instant, measured in milliseconds since the epoch
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    target_ms: i64,
}

impl Countdown {
    /// Launch is a fixed number of days after `now_ms`
    pub fn starting_at(now_ms: i64) -> Self {
        Self {
            target_ms: now_ms + LAUNCH_OFFSET_DAYS as i64 * MS_PER_DAY,
        }
    }

    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }

    /// Remaining time at `now_ms`
    pub fn remaining(&self, now_ms: i64) -> CountdownStatus {
        let distance = self.target_ms - now_ms;
        if distance < 0 {
            return CountdownStatus::Live;
        }
        CountdownStatus::Counting(TimeParts {
            days: distance / MS_PER_DAY,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_the_full_offset_out() {
        let countdown = Countdown::starting_at(0);
        assert_eq!(
            countdown.remaining(0),
            CountdownStatus::Counting(TimeParts {
                days: 90,
                hours: 0,
                minutes: 0,
                seconds: 0,
            })
        );
    }

    #[test]
    fn splits_remaining_time_into_parts() {
        let countdown = Countdown::starting_at(0);
        // 3 days, 4 hours, 5 minutes, 6 seconds before launch
        let now = countdown.target_ms()
            - (3 * MS_PER_DAY + 4 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 6 * MS_PER_SECOND);
        assert_eq!(
            countdown.remaining(now),
            CountdownStatus::Counting(TimeParts {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6,
            })
        );
    }

    #[test]
    fn sub_second_remainder_truncates() {
        let countdown = Countdown::starting_at(0);
        let now = countdown.target_ms() - 1500;
        assert_eq!(
            countdown.remaining(now),
            CountdownStatus::Counting(TimeParts {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1,
            })
        );
    }

    #[test]
    fn zero_distance_still_counts() {
        let countdown = Countdown::starting_at(0);
        assert!(matches!(
            countdown.remaining(countdown.target_ms()),
            CountdownStatus::Counting(_)
        ));
    }

    #[test]
    fn past_target_is_live() {
        let countdown = Countdown::starting_at(0);
        assert_eq!(countdown.remaining(countdown.target_ms() + 1), CountdownStatus::Live);
    }

    #[test]
    fn parts_render_zero_padded() {
        assert_eq!(TimeParts::padded(7), "07");
        assert_eq!(TimeParts::padded(42), "42");
        assert_eq!(TimeParts::padded(0), "00");
    }
}
