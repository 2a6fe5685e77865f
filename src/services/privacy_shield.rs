//! Privacy shield counters.
//!
//! This is a simulation: each page load adds small pseudo-random amounts to
//! the ad, tracker and script counters for whichever protections are switched
//! on. Nothing is intercepted; rendering happens in an external frame.

use ring::rand::{SecureRandom, SystemRandom};

use crate::types::privacy::{BlockedCounts, PrivacyCounters};
use crate::types::settings::BrowserSettings;

/// Source of uniformly distributed integers.
pub trait RandomSource: Send {
    /// Returns a value in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: u32) -> u32;
}

/// `RandomSource` backed by the operating system generator.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn below(&mut self, bound: u32) -> u32 {
        let mut bytes = [0u8; 4];
        if self.rng.fill(&mut bytes).is_err() {
            log::warn!("system random generator unavailable; shield counters use zero");
            return 0;
        }
        u32::from_le_bytes(bytes) % bound
    }
}

/// Trait defining the privacy shield interface.
pub trait PrivacyShieldTrait {
    /// Simulate the blocking that one page load would produce and add it to the counters.
    fn record_page_load(&mut self, settings: &BrowserSettings) -> BlockedCounts;
    fn counters(&self) -> &PrivacyCounters;
    fn set_counters(&mut self, counters: PrivacyCounters);
    fn reset(&mut self);
}

/// Owns the shield counters and the random source driving them.
pub struct PrivacyShield {
    counters: PrivacyCounters,
    rng: Box<dyn RandomSource>,
}

impl PrivacyShield {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            counters: PrivacyCounters::default(),
            rng,
        }
    }

    /// Uniform value in `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u64 {
        u64::from(low + self.rng.below(high - low + 1))
    }
}

impl Default for PrivacyShield {
    fn default() -> Self {
        Self::new(Box::new(SystemRandomSource::new()))
    }
}

impl PrivacyShieldTrait for PrivacyShield {
    fn record_page_load(&mut self, settings: &BrowserSettings) -> BlockedCounts {
        let blocked = BlockedCounts {
            ads: if settings.ad_block { self.between(1, 5) } else { 0 },
            trackers: if settings.anti_tracker { self.between(1, 3) } else { 0 },
            scripts: if settings.third_party_block { self.between(0, 1) } else { 0 },
            ram_optimized: self.between(10, 54),
        };

        let c = &mut self.counters;
        c.ads = c.ads.saturating_add(blocked.ads);
        c.trackers = c.trackers.saturating_add(blocked.trackers);
        c.scripts = c.scripts.saturating_add(blocked.scripts);
        c.ram_optimized = c.ram_optimized.saturating_add(blocked.ram_optimized);

        blocked
    }

    fn counters(&self) -> &PrivacyCounters {
        &self.counters
    }

    fn set_counters(&mut self, counters: PrivacyCounters) {
        self.counters = counters;
    }

    fn reset(&mut self) {
        self.counters = PrivacyCounters::default();
    }
}
