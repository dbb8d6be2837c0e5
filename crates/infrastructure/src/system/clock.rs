use chrono::{DateTime, Utc};
use sidestep_application::ports::Clock;

pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
