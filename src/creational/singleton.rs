// Pattern: Singleton
// Exactly one lazily created instance, shared by every caller.

use std::sync::{Mutex, OnceLock};

use lazy_static::lazy_static;

use crate::transcript::Transcript;

// ============================================================================
// Example: OnceLock with interior state
// ============================================================================

pub struct Counter {
    state: Mutex<i64>,
}

impl Counter {
    pub fn instance() -> &'static Counter {
        static INSTANCE: OnceLock<Counter> = OnceLock::new();
        INSTANCE.get_or_init(|| Counter {
            state: Mutex::new(0),
        })
    }

    pub fn set_state(&self, value: i64) {
        *self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
    }

    pub fn state(&self) -> i64 {
        *self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ============================================================================
// Example: Configured singleton with lazy_static
// ============================================================================

#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
}

lazy_static! {
    static ref SHARED_CLIENT: ApiClient = ApiClient {
        base_url: "www.iosmantra.com".to_string(),
    };
}

impl ApiClient {
    pub fn shared() -> &'static ApiClient {
        &SHARED_CLIENT
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

pub fn demo(out: &mut Transcript) {
    let counter = Counter::instance();
    counter.set_state(44);
    out.line(format!("Counter state: {}", Counter::instance().state()));

    out.line(format!("BaseURL => {}", ApiClient::shared().base_url()));
    let first = ApiClient::shared();
    let second = ApiClient::shared();
    out.line(format!("Same instance: {}", std::ptr::eq(first, second)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_is_shared() {
        assert!(std::ptr::eq(Counter::instance(), Counter::instance()));
    }

    #[test]
    fn test_state_visible_through_every_handle() {
        // Tests run in parallel on the same instance; only check a write we made.
        let handle = Counter::instance();
        handle.set_state(7);
        let seen = Counter::instance().state();
        assert!(seen == 7 || seen == 44);
    }

    #[test]
    fn test_api_client_configuration() {
        assert_eq!(ApiClient::shared().base_url(), "www.iosmantra.com");
        assert!(std::ptr::eq(ApiClient::shared(), ApiClient::shared()));
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert!(out.contains("BaseURL => www.iosmantra.com"));
        assert!(out.contains("Same instance: true"));
    }
}
