// Wall-clock helpers used to stamp report timings

pub trait Clock {
    fn unix_millis() -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_millis() -> i64 {
        #[cfg(miri)]
        {
            0
        }
        #[cfg(not(miri))]
        {
            chrono::Utc::now().timestamp_millis()
        }
    }
}

pub fn now_unix_millis() -> i64 {
    SystemClock::unix_millis()
}
