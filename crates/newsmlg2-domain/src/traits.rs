//! Trait definitions for external interactions
//!
//! These traits define the boundary between the domain model and the
//! conversion infrastructure, which lives in `newsmlg2-convert`.

/// Converts one complete input record into one complete output
///
/// Implementations are pure: converting the same input twice yields equal
/// outputs, and a conversion either succeeds entirely or fails with a
/// single error.
pub trait ItemConverter {
    /// Input record type
    type Input: ?Sized;

    /// Output produced on success
    type Output;

    /// Error type for conversion failures
    type Error;

    /// Convert one record
    fn convert(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
