use enerlab_core::emissions::{
    emission_report, gross_emission_coal, gross_emission_gas, gross_emission_oil,
    specific_emission_coal, specific_emission_oil,
};
use enerlab_core::rounding::through_display;

const EPS: f64 = 1e-12;

#[test]
fn coal_rate_is_the_fixed_plant_constant() {
    // (10^6 / 20.47) * 0.8 * (25.2 / 98.5) * 0.015, rounded.
    assert_eq!(specific_emission_coal(), 150);
}

#[test]
fn coal_gross_scales_with_consumption_and_rounds() {
    let rate = specific_emission_coal();
    assert_eq!(gross_emission_coal(rate, 0.0), 0);
    // 1e-6 * 150 * 20.47 * 1000 = 3.0705
    assert_eq!(gross_emission_coal(rate, 1000.0), 3);
}

#[test]
fn oil_rate_displays_as_fifty_seven_hundredths() {
    let rate = specific_emission_oil();
    let expected = (1e6 / 39.48) * (0.15 / 100.0) * (1.0 - 0.985);
    assert!((rate - expected).abs() < EPS);
    assert_eq!(format!("{rate:.2}"), "0.57");
}

#[test]
fn oil_gross_consumes_the_display_value_of_the_rate() {
    let report = emission_report(0.0, 1000.0, 0.0);
    assert!((report.oil_gross - gross_emission_oil(0.57, 1000.0)).abs() < EPS);
    // The full-precision rate would have given a different gross figure.
    assert!((report.oil_gross - gross_emission_oil(report.oil_rate, 1000.0)).abs() > EPS);
}

#[test]
fn display_roundtrip_equals_the_rounded_rate() {
    let rate = specific_emission_oil();
    assert_eq!(through_display(rate, 2), 0.57);
}

#[test]
fn gas_gross_is_zero_for_any_volume() {
    assert_eq!(gross_emission_gas(0, 123_456.0), 0);
    let report = emission_report(0.0, 0.0, 987_654.0);
    assert_eq!(report.gas_rate, 0);
    assert_eq!(report.gas_gross, 0);
}
