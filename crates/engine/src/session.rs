//! Explicit per-session state.
//!
//! The original system kept the login flag, notification counter, and refresh
//! clock as ambient process globals; here they are one struct handed into the
//! operations that touch them. Nothing is persisted; a session's state dies
//! with it.

use radiolog_core::Role;
use std::time::{Duration, Instant};

/// How long a view may go without re-fetching the log before the refresh
/// trigger fires. Polling liveness, not push notification.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// State of one authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    role: Role,
    unseen: u32,
    last_refresh: Instant,
}

impl Session {
    /// Start a session for an authenticated role. The refresh clock starts
    /// now; the unseen counter starts at zero.
    pub fn new(role: Role) -> Self {
        Session {
            role,
            unseen: 0,
            last_refresh: Instant::now(),
        }
    }

    /// The authenticated role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Count one successful upload since the notifications were last viewed.
    pub fn record_upload(&mut self) {
        self.unseen += 1;
    }

    /// Uploads since the notifications were last viewed.
    pub fn unseen(&self) -> u32 {
        self.unseen
    }

    /// View the notifications: returns the unseen count and resets it.
    pub fn take_unseen(&mut self) -> u32 {
        std::mem::take(&mut self.unseen)
    }

    /// Whether a periodic re-fetch is due at `now`.
    ///
    /// Fires once more than [`REFRESH_INTERVAL`] has elapsed since the last
    /// refresh, and rearms the clock when it does.
    pub fn refresh_due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_refresh) > REFRESH_INTERVAL {
            self.last_refresh = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uploads_accumulate_until_viewed() {
        let mut session = Session::new(Role::Admin);
        assert_eq!(session.unseen(), 0);

        session.record_upload();
        session.record_upload();
        assert_eq!(session.unseen(), 2);

        assert_eq!(session.take_unseen(), 2);
        assert_eq!(session.unseen(), 0, "viewing resets the counter");
    }

    #[test]
    fn refresh_fires_after_interval_and_rearms() {
        let mut session = Session::new(Role::S1);
        let start = Instant::now();

        assert!(!session.refresh_due(start), "fresh session is not due");

        let later = start + REFRESH_INTERVAL + Duration::from_secs(1);
        // The clock in the session was set slightly before `start`, so this
        // is past the interval.
        assert!(session.refresh_due(later));
        assert!(!session.refresh_due(later), "firing rearms the clock");

        let much_later = later + REFRESH_INTERVAL + Duration::from_secs(1);
        assert!(session.refresh_due(much_later));
    }

    #[test]
    fn session_state_is_per_session() {
        let mut a = Session::new(Role::Admin);
        let b = Session::new(Role::Admin);

        a.record_upload();
        assert_eq!(a.unseen(), 1);
        assert_eq!(b.unseen(), 0);
    }
}
