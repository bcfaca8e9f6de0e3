//! Solid-particle emission factors for the three fuels fired at the
//! reference boiler plant: coal, fuel oil and natural gas.

use serde::Serialize;

use crate::rounding::through_display;

const COAL_NET_HEAT_MJ_KG: f64 = 20.47;
const OIL_NET_HEAT_MJ_KG: f64 = 39.48;
const GAS_NET_HEAT_MJ_M3: f64 = 33.08;

const COAL_FLY_ASH_SHARE: f64 = 0.8;
const COAL_ASH_PCT: f64 = 25.2;
const COAL_COMBUSTIBLE_IN_ASH_PCT: f64 = 1.5;

const OIL_FLY_ASH_SHARE: f64 = 1.0;
const OIL_ASH_PCT: f64 = 0.15;
const OIL_COMBUSTIBLE_IN_ASH_PCT: f64 = 0.0;

const COLLECTOR_EFFICIENCY: f64 = 0.985;

/// Specific solid-particle emission for coal firing, g/GJ, rounded to the
/// nearest whole figure. All inputs are fixed plant characteristics.
pub fn specific_emission_coal() -> i64 {
    let rate = (1e6 / COAL_NET_HEAT_MJ_KG)
        * COAL_FLY_ASH_SHARE
        * (COAL_ASH_PCT / (100.0 - COAL_COMBUSTIBLE_IN_ASH_PCT))
        * (1.0 - COLLECTOR_EFFICIENCY);
    rate.round() as i64
}

/// Gross emission for the given coal consumption, tonnes.
pub fn gross_emission_coal(rate: i64, coal_tonnes: f64) -> i64 {
    (1e-6 * rate as f64 * COAL_NET_HEAT_MJ_KG * coal_tonnes).round() as i64
}

/// Specific solid-particle emission for fuel-oil firing, full precision.
pub fn specific_emission_oil() -> f64 {
    (1e6 / OIL_NET_HEAT_MJ_KG)
        * OIL_FLY_ASH_SHARE
        * (OIL_ASH_PCT / (100.0 - OIL_COMBUSTIBLE_IN_ASH_PCT))
        * (1.0 - COLLECTOR_EFFICIENCY)
}

pub fn gross_emission_oil(rate: f64, oil_tonnes: f64) -> f64 {
    1e-6 * rate * OIL_NET_HEAT_MJ_KG * oil_tonnes
}

/// The natural-gas rate has not been derived yet, so gas firing reports a
/// zero rate and, consequently, a zero gross figure.
/// TODO: derive the solid-particle rate for gas firing.
pub fn specific_emission_gas() -> i64 {
    0
}

pub fn gross_emission_gas(rate: i64, gas_volume: f64) -> i64 {
    (1e-6 * rate as f64 * GAS_NET_HEAT_MJ_M3 * gas_volume).round() as i64
}

/// Every figure reported for one submission of fuel consumptions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionReport {
    pub coal_rate: i64,
    pub coal_gross: i64,
    pub oil_rate: f64,
    pub oil_gross: f64,
    pub gas_rate: i64,
    pub gas_gross: i64,
}

pub fn emission_report(coal_tonnes: f64, oil_tonnes: f64, gas_volume: f64) -> EmissionReport {
    let coal_rate = specific_emission_coal();
    let oil_rate = specific_emission_oil();
    let gas_rate = specific_emission_gas();
    EmissionReport {
        coal_rate,
        coal_gross: gross_emission_coal(coal_rate, coal_tonnes),
        oil_rate,
        // The gross figure consumes the two-decimal display value of the
        // rate, not the full-precision one.
        oil_gross: gross_emission_oil(through_display(oil_rate, 2), oil_tonnes),
        gas_rate,
        gas_gross: gross_emission_gas(gas_rate, gas_volume),
    }
}
