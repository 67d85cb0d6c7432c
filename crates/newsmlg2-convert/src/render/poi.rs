use newsmlg2_domain::{Poi, Rank};

use crate::fields::PoiEntry;

/// Points of interest with a positional identifier and rank
pub fn render_pois(pois: &[Poi]) -> Vec<PoiEntry> {
    pois.iter()
        .enumerate()
        .map(|(idx, poi)| PoiEntry {
            name: poi.name.clone(),
            literal: format!("poiID{}", idx),
            rank: Rank::from_position(idx).to_string(),
            address: poi.formatted_address.clone(),
            city: poi.city.clone(),
            country: poi.country.clone(),
            longitude: poi.longitude.clone(),
            latitude: poi.latitude.clone(),
        })
        .collect()
}
