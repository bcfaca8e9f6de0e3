use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Form, Json};
use serde::Deserialize;

use enerlab_core::emissions::{emission_report, EmissionReport};
use enerlab_http::number_or_zero;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    form: IndexForm,
    results: Option<EmissionView>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IndexForm {
    coal: String,
    #[serde(rename = "oil-fuel")]
    oil_fuel: String,
    #[serde(rename = "natural-gas")]
    natural_gas: String,
}

/// Figures formatted for the page: coal and gas as whole numbers, the oil
/// pair at two decimals.
struct EmissionView {
    coal_rate: i64,
    coal_gross: i64,
    oil_rate: String,
    oil_gross: String,
    gas_rate: i64,
    gas_gross: i64,
}

impl EmissionView {
    fn from_report(report: &EmissionReport) -> Self {
        Self {
            coal_rate: report.coal_rate,
            coal_gross: report.coal_gross,
            oil_rate: format!("{:.2}", report.oil_rate),
            oil_gross: format!("{:.2}", report.oil_gross),
            gas_rate: report.gas_rate,
            gas_gross: report.gas_gross,
        }
    }
}

pub async fn index() -> Result<Html<String>, StatusCode> {
    render(IndexTemplate {
        form: IndexForm::default(),
        results: None,
    })
}

pub async fn submit(Form(form): Form<IndexForm>) -> Result<Html<String>, StatusCode> {
    let report = emission_report(
        number_or_zero(&form.coal),
        number_or_zero(&form.oil_fuel),
        number_or_zero(&form.natural_gas),
    );
    render(IndexTemplate {
        results: Some(EmissionView::from_report(&report)),
        form,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EmissionRequest {
    pub coal: f64,
    pub oil_fuel: f64,
    pub natural_gas: f64,
}

pub async fn api_emissions(Json(request): Json<EmissionRequest>) -> Json<EmissionReport> {
    Json(emission_report(
        request.coal,
        request.oil_fuel,
        request.natural_gas,
    ))
}

fn render(page: IndexTemplate) -> Result<Html<String>, StatusCode> {
    page.render().map(Html).map_err(|err| {
        tracing::error!("template render failed: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
