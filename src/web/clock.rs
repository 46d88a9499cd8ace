//! Local wall clock backed by the JS `Date`.

use crate::gateway::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn local_hour(&self) -> u32 {
        js_sys::Date::new_0().get_hours()
    }
}
