use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use enerlab_core::error::FuelError;
use enerlab_core::fuel::{self, FuelOilSample, FuelSample};
use enerlab_http::number_or_zero;

use crate::views::{FuelOilView, FuelView};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    form: IndexForm,
    fuel: Option<FuelView>,
    fuel_oil: Option<FuelOilView>,
    error: Option<String>,
}

impl IndexTemplate {
    fn empty() -> Self {
        Self {
            form: IndexForm::default(),
            fuel: None,
            fuel_oil: None,
            error: None,
        }
    }
}

/// Raw form fields, echoed back into the inputs on re-render. Numeric
/// parsing happens through `number_or_zero`, so the strings are kept as
/// submitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IndexForm {
    calculator: String,
    hydrogen: String,
    carbon: String,
    sulfur: String,
    nitrogen: String,
    oxygen: String,
    moisture: String,
    ash: String,
    #[serde(rename = "carbon-fuel-oil")]
    carbon_fuel_oil: String,
    #[serde(rename = "hydrogen-fuel-oil")]
    hydrogen_fuel_oil: String,
    #[serde(rename = "sulfur-fuel-oil")]
    sulfur_fuel_oil: String,
    #[serde(rename = "vanadi-fuel-oil")]
    vanadium_fuel_oil: String,
    #[serde(rename = "oxygen-fuel-oil")]
    oxygen_fuel_oil: String,
    #[serde(rename = "moisture-fuel-oil")]
    moisture_fuel_oil: String,
    #[serde(rename = "ash-fuel-oil")]
    ash_fuel_oil: String,
    #[serde(rename = "lower-heat-combustion")]
    lower_heat_combustion: String,
}

impl IndexForm {
    fn fuel_sample(&self) -> FuelSample {
        FuelSample {
            hydrogen: number_or_zero(&self.hydrogen),
            carbon: number_or_zero(&self.carbon),
            sulfur: number_or_zero(&self.sulfur),
            nitrogen: number_or_zero(&self.nitrogen),
            oxygen: number_or_zero(&self.oxygen),
            moisture: number_or_zero(&self.moisture),
            ash: number_or_zero(&self.ash),
        }
    }

    fn fuel_oil_sample(&self) -> FuelOilSample {
        FuelOilSample {
            carbon: number_or_zero(&self.carbon_fuel_oil),
            hydrogen: number_or_zero(&self.hydrogen_fuel_oil),
            sulfur: number_or_zero(&self.sulfur_fuel_oil),
            vanadium: number_or_zero(&self.vanadium_fuel_oil),
            oxygen: number_or_zero(&self.oxygen_fuel_oil),
            moisture: number_or_zero(&self.moisture_fuel_oil),
            ash: number_or_zero(&self.ash_fuel_oil),
            lower_heat: number_or_zero(&self.lower_heat_combustion),
        }
    }
}

pub async fn index() -> Result<Html<String>, StatusCode> {
    render(IndexTemplate::empty())
}

pub async fn submit(Form(form): Form<IndexForm>) -> Result<Html<String>, StatusCode> {
    let mut page = IndexTemplate::empty();

    match form.calculator.as_str() {
        "fuel" => {
            let sample = form.fuel_sample();
            match FuelView::compute(&sample) {
                Ok(view) => page.fuel = Some(view),
                Err(err) => {
                    tracing::warn!("fuel calculation rejected: {err}");
                    page.error = Some(err.to_string());
                }
            }
        }
        "fuel-oil" => {
            let sample = form.fuel_oil_sample();
            page.fuel_oil = Some(FuelOilView::compute(&sample));
        }
        other => {
            tracing::debug!("unknown calculator selector {other:?}");
        }
    }

    page.form = form;
    render(page)
}

#[derive(Debug, Serialize)]
pub struct FuelResponse {
    pub dry: fuel::DryBasis,
    pub combustible: fuel::CombustibleBasis,
    pub heat: fuel::HeatValues,
}

pub async fn api_fuel(
    Json(sample): Json<FuelSample>,
) -> Result<Json<FuelResponse>, (StatusCode, String)> {
    let dry = fuel::dry_basis(&sample).map_err(reject)?;
    let combustible = fuel::combustible_basis(&sample).map_err(reject)?;
    let heat = fuel::heat_of_combustion(&sample).map_err(reject)?;
    Ok(Json(FuelResponse {
        dry,
        combustible,
        heat,
    }))
}

#[derive(Debug, Serialize)]
pub struct FuelOilResponse {
    pub composition: fuel::FuelOilComposition,
    pub lower_heat: f64,
}

pub async fn api_fuel_oil(Json(sample): Json<FuelOilSample>) -> Json<FuelOilResponse> {
    Json(FuelOilResponse {
        composition: fuel::fuel_oil_composition(&sample),
        lower_heat: fuel::fuel_oil_lower_heat(&sample),
    })
}

fn reject(err: FuelError) -> (StatusCode, String) {
    tracing::warn!("fuel calculation rejected: {err}");
    (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
}

fn render(page: IndexTemplate) -> Result<Html<String>, StatusCode> {
    page.render().map(Html).map_err(|err| {
        tracing::error!("template render failed: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
