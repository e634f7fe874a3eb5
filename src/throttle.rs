use crate::domain::SubscriberEmail;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Limits magic-link deliveries to one per address per cooldown window.
pub struct MagicLinkThrottle {
    cooldown: Duration,
    last_sent: Mutex<HashMap<SubscriberEmail, Instant>>,
}

impl MagicLinkThrottle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_sent: Mutex::new(HashMap::new()),
        }
    }

    /// Records a delivery and returns `true` if `email` is outside its
    /// cooldown window.
    pub fn try_acquire(&self, email: &SubscriberEmail) -> bool {
        self.try_acquire_at(email, Instant::now())
    }

    fn try_acquire_at(&self, email: &SubscriberEmail, now: Instant) -> bool {
        if self.cooldown.is_zero() {
            return true;
        }
        let mut last_sent = self.last_sent.lock().unwrap_or_else(PoisonError::into_inner);
        let cooldown = self.cooldown;
        last_sent.retain(|_, sent_at| now.saturating_duration_since(*sent_at) < cooldown);
        if last_sent.contains_key(email) {
            return false;
        }
        last_sent.insert(email.clone(), now);
        true
    }
}
