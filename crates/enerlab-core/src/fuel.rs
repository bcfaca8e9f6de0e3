use serde::{Deserialize, Serialize};

use crate::error::FuelError;

/// Elemental composition of a solid fuel sample, in mass percent of the
/// as-received mass. Percentages are taken as entered and are not required
/// to sum to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelSample {
    pub hydrogen: f64,
    pub carbon: f64,
    pub sulfur: f64,
    pub nitrogen: f64,
    pub oxygen: f64,
    pub moisture: f64,
    pub ash: f64,
}

/// Fuel-oil composition plus the measured lower heat of combustion, MJ/kg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelOilSample {
    pub carbon: f64,
    pub hydrogen: f64,
    pub sulfur: f64,
    pub vanadium: f64,
    pub oxygen: f64,
    pub moisture: f64,
    pub ash: f64,
    pub lower_heat: f64,
}

/// Composition rescaled as if moisture were removed. `k` is the conversion
/// factor the elements were multiplied by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DryBasis {
    pub k: f64,
    pub hydrogen: f64,
    pub carbon: f64,
    pub sulfur: f64,
    pub nitrogen: f64,
    pub oxygen: f64,
    pub ash: f64,
}

/// Composition rescaled excluding both moisture and ash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CombustibleBasis {
    pub k: f64,
    pub hydrogen: f64,
    pub carbon: f64,
    pub sulfur: f64,
    pub nitrogen: f64,
    pub oxygen: f64,
}

/// Lower heat of combustion on the three reporting bases, MJ/kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatValues {
    pub as_received: f64,
    pub dry: f64,
    pub combustible: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelOilComposition {
    pub hydrogen: f64,
    pub carbon: f64,
    pub sulfur: f64,
    pub vanadium: f64,
    pub ash: f64,
    pub oxygen: f64,
}

pub fn dry_basis(sample: &FuelSample) -> Result<DryBasis, FuelError> {
    let remainder = 100.0 - sample.moisture;
    if remainder == 0.0 {
        return Err(FuelError::NoDryMass {
            moisture: sample.moisture,
        });
    }
    let k = 100.0 / remainder;
    Ok(DryBasis {
        k,
        hydrogen: k * sample.hydrogen,
        carbon: k * sample.carbon,
        sulfur: k * sample.sulfur,
        nitrogen: k * sample.nitrogen,
        oxygen: k * sample.oxygen,
        ash: k * sample.ash,
    })
}

pub fn combustible_basis(sample: &FuelSample) -> Result<CombustibleBasis, FuelError> {
    let remainder = 100.0 - sample.moisture - sample.ash;
    if remainder == 0.0 {
        return Err(FuelError::NoCombustibleMass {
            moisture: sample.moisture,
            ash: sample.ash,
        });
    }
    let k = 100.0 / remainder;
    Ok(CombustibleBasis {
        k,
        hydrogen: k * sample.hydrogen,
        carbon: k * sample.carbon,
        sulfur: k * sample.sulfur,
        nitrogen: k * sample.nitrogen,
        oxygen: k * sample.oxygen,
    })
}

/// Mendeleev formula for the lower heat of combustion from the elemental
/// composition, plus the dry- and combustible-basis conversions.
pub fn heat_of_combustion(sample: &FuelSample) -> Result<HeatValues, FuelError> {
    let dry_remainder = 100.0 - sample.moisture;
    if dry_remainder == 0.0 {
        return Err(FuelError::NoDryMass {
            moisture: sample.moisture,
        });
    }
    let combustible_remainder = 100.0 - sample.moisture - sample.ash;
    if combustible_remainder == 0.0 {
        return Err(FuelError::NoCombustibleMass {
            moisture: sample.moisture,
            ash: sample.ash,
        });
    }

    let q = (339.0 * sample.carbon + 1030.0 * sample.hydrogen
        - 108.8 * (sample.oxygen - sample.sulfur)
        - 25.0 * sample.moisture)
        / 1000.0;
    let moisture_adjusted = q + 0.025 * sample.moisture;

    Ok(HeatValues {
        as_received: q,
        dry: moisture_adjusted * (100.0 / dry_remainder),
        combustible: moisture_adjusted * (100.0 / combustible_remainder),
    })
}

/// Rescale a fuel-oil analysis to exclude moisture and ash. Vanadium and ash
/// themselves are reported on the moisture-free basis only.
pub fn fuel_oil_composition(sample: &FuelOilSample) -> FuelOilComposition {
    let factor = (100.0 - sample.moisture - sample.ash) / 100.0;
    let factor_moisture_only = (100.0 - sample.moisture) / 100.0;
    FuelOilComposition {
        hydrogen: sample.hydrogen * factor,
        carbon: sample.carbon * factor,
        sulfur: sample.sulfur * factor,
        vanadium: sample.vanadium * factor_moisture_only,
        ash: sample.ash * factor_moisture_only,
        oxygen: sample.oxygen * factor,
    }
}

/// Net lower heat of a fuel-oil sample from its measured heat of combustion.
pub fn fuel_oil_lower_heat(sample: &FuelOilSample) -> f64 {
    sample.lower_heat * ((100.0 - sample.moisture - sample.ash) / 100.0) - 0.025 * sample.moisture
}
