//! Points of interest

/// A point of interest derived from a category's geo-JSON payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Poi {
    /// Place name
    pub name: Option<String>,

    /// Postal address as one line
    pub formatted_address: Option<String>,

    /// City (the geo-JSON `locality`)
    pub city: Option<String>,

    /// Country
    pub country: Option<String>,

    /// First coordinate
    pub longitude: Option<String>,

    /// Second coordinate
    pub latitude: Option<String>,
}
