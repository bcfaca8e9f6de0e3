use enerlab_core::error::FuelError;
use enerlab_core::fuel::{
    combustible_basis, dry_basis, fuel_oil_composition, fuel_oil_lower_heat, heat_of_combustion,
    FuelOilSample, FuelSample,
};

const EPS: f64 = 1e-12;

fn coal_sample() -> FuelSample {
    FuelSample {
        hydrogen: 5.0,
        carbon: 50.0,
        sulfur: 1.0,
        nitrogen: 2.0,
        oxygen: 10.0,
        moisture: 5.0,
        ash: 4.0,
    }
}

#[test]
fn dry_basis_scales_every_element_by_the_moisture_factor() {
    let sample = coal_sample();
    let dry = dry_basis(&sample).unwrap();

    let k = 100.0 / (100.0 - sample.moisture);
    assert!((dry.k - k).abs() < EPS);
    assert!((dry.hydrogen - k * sample.hydrogen).abs() < EPS);
    assert!((dry.carbon - k * sample.carbon).abs() < EPS);
    assert!((dry.sulfur - k * sample.sulfur).abs() < EPS);
    assert!((dry.nitrogen - k * sample.nitrogen).abs() < EPS);
    assert!((dry.oxygen - k * sample.oxygen).abs() < EPS);
    assert!((dry.ash - k * sample.ash).abs() < EPS);
}

#[test]
fn combustible_basis_excludes_ash_from_the_output() {
    let sample = coal_sample();
    let combustible = combustible_basis(&sample).unwrap();

    let k = 100.0 / (100.0 - sample.moisture - sample.ash);
    assert!((combustible.k - k).abs() < EPS);
    assert!((combustible.hydrogen - k * sample.hydrogen).abs() < EPS);
    assert!((combustible.carbon - k * sample.carbon).abs() < EPS);
    assert!((combustible.sulfur - k * sample.sulfur).abs() < EPS);
    assert!((combustible.nitrogen - k * sample.nitrogen).abs() < EPS);
    assert!((combustible.oxygen - k * sample.oxygen).abs() < EPS);
}

#[test]
fn saturated_sample_is_rejected_instead_of_dividing_by_zero() {
    let sample = FuelSample {
        moisture: 100.0,
        ..FuelSample::default()
    };
    assert_eq!(
        dry_basis(&sample),
        Err(FuelError::NoDryMass { moisture: 100.0 })
    );

    let sample = FuelSample {
        moisture: 60.0,
        ash: 40.0,
        ..FuelSample::default()
    };
    assert_eq!(
        combustible_basis(&sample),
        Err(FuelError::NoCombustibleMass {
            moisture: 60.0,
            ash: 40.0
        })
    );
    assert!(heat_of_combustion(&sample).is_err());
}

#[test]
fn heat_of_combustion_matches_the_mendeleev_formula() {
    let sample = coal_sample();
    let heat = heat_of_combustion(&sample).unwrap();

    let q = (339.0 * 50.0 + 1030.0 * 5.0 - 108.8 * (10.0 - 1.0) - 25.0 * 5.0) / 1000.0;
    assert!((heat.as_received - q).abs() < EPS);
    assert!((heat.dry - (q + 0.025 * 5.0) * (100.0 / 95.0)).abs() < EPS);
    assert!((heat.combustible - (q + 0.025 * 5.0) * (100.0 / 91.0)).abs() < EPS);
}

#[test]
fn fuel_oil_vanadium_and_ash_use_the_moisture_only_factor() {
    let sample = FuelOilSample {
        carbon: 85.0,
        hydrogen: 11.0,
        sulfur: 2.5,
        vanadium: 0.02,
        oxygen: 0.8,
        moisture: 2.0,
        ash: 0.3,
        lower_heat: 40.5,
    };
    let composition = fuel_oil_composition(&sample);

    let factor = (100.0 - 2.0 - 0.3) / 100.0;
    let factor_moisture_only = (100.0 - 2.0) / 100.0;
    assert!((composition.carbon - 85.0 * factor).abs() < EPS);
    assert!((composition.hydrogen - 11.0 * factor).abs() < EPS);
    assert!((composition.sulfur - 2.5 * factor).abs() < EPS);
    assert!((composition.oxygen - 0.8 * factor).abs() < EPS);
    assert!((composition.vanadium - 0.02 * factor_moisture_only).abs() < EPS);
    assert!((composition.ash - 0.3 * factor_moisture_only).abs() < EPS);
}

#[test]
fn fuel_oil_lower_heat_subtracts_the_moisture_penalty() {
    let sample = FuelOilSample {
        moisture: 2.0,
        ash: 0.3,
        lower_heat: 40.5,
        ..FuelOilSample::default()
    };
    let expected = 40.5 * ((100.0 - 2.0 - 0.3) / 100.0) - 0.025 * 2.0;
    assert!((fuel_oil_lower_heat(&sample) - expected).abs() < EPS);
}
