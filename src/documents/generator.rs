//! Fixture document generation
//!
//! This module generates realistic fixture fleets for demos and testing,
//! standing in for the production upload flow. Generated expirations are
//! spread across expired, due-for-renewal, and comfortably-valid ranges
//! according to the configured ratios.

use crate::documents::DocumentRecord;
use crate::types::{CoreConfig, DocumentKind, VehicleId};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Document kinds every generated vehicle carries
const FLEET_DOCUMENT_KINDS: [DocumentKind; 4] = [
    DocumentKind::Registration,
    DocumentKind::Insurance,
    DocumentKind::TechnicalInspection,
    DocumentKind::OperatingPermit,
];

/// Generates fixture document records for a fleet of vehicles
#[derive(Debug)]
pub struct DocumentGenerator {
    rng: StdRng,
}

impl DocumentGenerator {
    /// Create a generator seeded from entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Create a generator with a fixed seed for reproducible fixtures
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Create a generator from the configured seed, or entropy if none
    pub fn from_config(config: &CoreConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Generate document records for a fixture fleet
    ///
    /// Each vehicle carries one document of every kind in the standard
    /// fleet set. Expirations fall into the expired / due / missing /
    /// valid buckets according to the configured ratios.
    pub fn generate_fleet(
        &mut self,
        config: &CoreConfig,
        now: DateTime<Utc>,
    ) -> Vec<DocumentRecord> {
        let mut documents =
            Vec::with_capacity(config.fixture_vehicle_count * FLEET_DOCUMENT_KINDS.len());

        for vehicle_index in 0..config.fixture_vehicle_count {
            let vehicle_id = VehicleId::new();
            for kind in FLEET_DOCUMENT_KINDS {
                let name = format!("{} #{}", kind, vehicle_index + 1);
                let expires_at = self.pick_expiry(config, now);
                documents.push(DocumentRecord::new(vehicle_id, kind, name, expires_at));
            }
        }

        info!(
            vehicles = config.fixture_vehicle_count,
            documents = documents.len(),
            "generated fixture fleet"
        );

        documents
    }

    /// Pick an expiration date for one document according to the ratios
    fn pick_expiry(&mut self, config: &CoreConfig, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let roll: f64 = self.rng.gen();
        let window = config.renewal_window_days.max(1);

        if roll < config.fixture_expired_ratio {
            // Expired between 1 and 180 days ago
            let days_ago = self.rng.gen_range(1..=180);
            Some(now - Duration::days(days_ago))
        } else if roll < config.fixture_expired_ratio + config.fixture_due_ratio {
            // Due within the renewal window
            let days_ahead = self.rng.gen_range(0..=window);
            Some(now + Duration::days(days_ahead))
        } else if roll
            < config.fixture_expired_ratio
                + config.fixture_due_ratio
                + config.fixture_missing_expiry_ratio
        {
            None
        } else {
            // Comfortably valid: past the window, up to two years out
            let days_ahead = self.rng.gen_range((window + 1)..=(window + 730));
            Some(now + Duration::days(days_ahead))
        }
    }
}

impl Default for DocumentGenerator {
    fn default() -> Self {
        Self::new()
    }
}
