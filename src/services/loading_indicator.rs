//! Cosmetic "page is loading" flag.
//!
//! Raised for a fixed window after each navigation. It says nothing about the
//! content frame, which loads on its own.

use std::time::{Duration, Instant};

/// How long the flag stays up after a navigation.
pub const LOADING_FLASH: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    until: Option<Instant>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self { until: None }
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.until = Some(now + LOADING_FLASH);
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading_at(Instant::now())
    }

    pub fn is_loading_at(&self, now: Instant) -> bool {
        self.until.map_or(false, |until| now < until)
    }
}
