use enerlab_core::error::FuelError;
use enerlab_core::fuel::{self, FuelOilSample, FuelSample};

fn f2(value: f64) -> String {
    format!("{value:.2}")
}

/// Solid-fuel results formatted for the page, two decimals throughout.
pub struct FuelView {
    pub dry_k: String,
    pub dry_hydrogen: String,
    pub dry_carbon: String,
    pub dry_sulfur: String,
    pub dry_nitrogen: String,
    pub dry_oxygen: String,
    pub dry_ash: String,
    pub combustible_k: String,
    pub combustible_hydrogen: String,
    pub combustible_carbon: String,
    pub combustible_sulfur: String,
    pub combustible_nitrogen: String,
    pub combustible_oxygen: String,
    pub heat_as_received: String,
    pub heat_dry: String,
    pub heat_combustible: String,
}

impl FuelView {
    pub fn compute(sample: &FuelSample) -> Result<Self, FuelError> {
        let dry = fuel::dry_basis(sample)?;
        let combustible = fuel::combustible_basis(sample)?;
        let heat = fuel::heat_of_combustion(sample)?;
        Ok(Self {
            dry_k: f2(dry.k),
            dry_hydrogen: f2(dry.hydrogen),
            dry_carbon: f2(dry.carbon),
            dry_sulfur: f2(dry.sulfur),
            dry_nitrogen: f2(dry.nitrogen),
            dry_oxygen: f2(dry.oxygen),
            dry_ash: f2(dry.ash),
            combustible_k: f2(combustible.k),
            combustible_hydrogen: f2(combustible.hydrogen),
            combustible_carbon: f2(combustible.carbon),
            combustible_sulfur: f2(combustible.sulfur),
            combustible_nitrogen: f2(combustible.nitrogen),
            combustible_oxygen: f2(combustible.oxygen),
            heat_as_received: f2(heat.as_received),
            heat_dry: f2(heat.dry),
            heat_combustible: f2(heat.combustible),
        })
    }
}

pub struct FuelOilView {
    pub hydrogen: String,
    pub carbon: String,
    pub sulfur: String,
    pub vanadium: String,
    pub ash: String,
    pub oxygen: String,
    pub lower_heat: String,
}

impl FuelOilView {
    pub fn compute(sample: &FuelOilSample) -> Self {
        let composition = fuel::fuel_oil_composition(sample);
        Self {
            hydrogen: f2(composition.hydrogen),
            carbon: f2(composition.carbon),
            sulfur: f2(composition.sulfur),
            vanadium: f2(composition.vanadium),
            ash: f2(composition.ash),
            oxygen: f2(composition.oxygen),
            lower_heat: f2(fuel::fuel_oil_lower_heat(sample)),
        }
    }
}
