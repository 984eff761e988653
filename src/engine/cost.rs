use rust_decimal::Decimal;

use crate::model::AmenitySelection;

use super::EngineError;

/// Nightly base rate per bed count. Anything outside the table is an error.
pub fn base_rate(beds: u32) -> Result<Decimal, EngineError> {
    match beds {
        1 => Ok(Decimal::from(50)),
        2 => Ok(Decimal::from(75)),
        3 => Ok(Decimal::from(90)),
        other => Err(EngineError::InvalidBedCount(other)),
    }
}

pub fn room_cost(beds: u32, days: u16) -> Result<Decimal, EngineError> {
    Ok(base_rate(beds)? * Decimal::from(days))
}

/// Amenity charge: each selection's per-day cost, summed once per selection
/// and multiplied by the day count. The selection count does not factor in.
pub fn amenity_cost(selections: &[AmenitySelection], days: u16) -> Decimal {
    if selections.is_empty() {
        return Decimal::ZERO;
    }
    let per_day: Decimal = selections.iter().map(|s| s.amenity().cost).sum();
    per_day * Decimal::from(days)
}

pub fn total_cost(
    beds: u32,
    selections: &[AmenitySelection],
    days: u16,
) -> Result<Decimal, EngineError> {
    Ok(room_cost(beds, days)? + amenity_cost(selections, days))
}
