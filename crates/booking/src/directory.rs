use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::BookingError;

/// Maps human campsite numbers to the reservation system's internal site
/// ids for one park.
///
/// Loaded from a JSON file shaped like
/// `{"park_id": 70473, "sites": {"5": 1879, "22": 1877}}`. Sites missing
/// from the map resolve to their own number, which lets the file stay
/// sparse and also lets a caller pass an internal id directly.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteDirectory {
    /// Reservation-system park id the sites belong to.
    pub park_id: u32,
    /// Site number to internal site id.
    #[serde(default)]
    pub sites: HashMap<u32, u32>,
}

impl SiteDirectory {
    /// Reads the directory from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BookingError> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Resolves a site number to its internal site id, falling back to the
    /// number itself when the directory has no entry for it.
    pub fn resolve(&self, site: u32) -> u32 {
        self.sites.get(&site).copied().unwrap_or(site)
    }
}
