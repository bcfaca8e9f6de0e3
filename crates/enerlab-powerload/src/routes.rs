use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Form, Json};
use serde::Deserialize;

use enerlab_core::loads::{workshop_report, ReceiverGroup, WorkshopReport};
use enerlab_http::number_or_zero;

use crate::views::WorkshopView;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    form: IndexForm,
    results: Option<WorkshopView>,
}

/// Raw fields for the three receiver-group rows, echoed back on re-render.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IndexForm {
    #[serde(rename = "name-of-EP")]
    name_1: String,
    #[serde(rename = "nominal-value-efficiency-coefficient")]
    efficiency_1: String,
    #[serde(rename = "load-power-factor")]
    power_factor_1: String,
    #[serde(rename = "load-voltage")]
    voltage_1: String,
    #[serde(rename = "number-of-EP")]
    count_1: String,
    #[serde(rename = "nominal-power-of-EP")]
    rated_power_1: String,
    #[serde(rename = "utilization-rate")]
    utilization_1: String,
    #[serde(rename = "reactive-power-factor")]
    tangent_1: String,

    #[serde(rename = "name-of-EP-2")]
    name_2: String,
    #[serde(rename = "nominal-value-efficiency-coefficient-2")]
    efficiency_2: String,
    #[serde(rename = "load-power-factor-2")]
    power_factor_2: String,
    #[serde(rename = "load-voltage-2")]
    voltage_2: String,
    #[serde(rename = "number-of-EP-2")]
    count_2: String,
    #[serde(rename = "nominal-power-of-EP-2")]
    rated_power_2: String,
    #[serde(rename = "utilization-rate-2")]
    utilization_2: String,
    #[serde(rename = "reactive-power-factor-2")]
    tangent_2: String,

    #[serde(rename = "name-of-EP-3")]
    name_3: String,
    #[serde(rename = "nominal-value-efficiency-coefficient-3")]
    efficiency_3: String,
    #[serde(rename = "load-power-factor-3")]
    power_factor_3: String,
    #[serde(rename = "load-voltage-3")]
    voltage_3: String,
    #[serde(rename = "number-of-EP-3")]
    count_3: String,
    #[serde(rename = "nominal-power-of-EP-3")]
    rated_power_3: String,
    #[serde(rename = "utilization-rate-3")]
    utilization_3: String,
    #[serde(rename = "reactive-power-factor-3")]
    tangent_3: String,
}

impl IndexForm {
    fn groups(&self) -> [ReceiverGroup; 3] {
        [
            group(
                &self.name_1,
                &self.efficiency_1,
                &self.power_factor_1,
                &self.voltage_1,
                &self.count_1,
                &self.rated_power_1,
                &self.utilization_1,
                &self.tangent_1,
            ),
            group(
                &self.name_2,
                &self.efficiency_2,
                &self.power_factor_2,
                &self.voltage_2,
                &self.count_2,
                &self.rated_power_2,
                &self.utilization_2,
                &self.tangent_2,
            ),
            group(
                &self.name_3,
                &self.efficiency_3,
                &self.power_factor_3,
                &self.voltage_3,
                &self.count_3,
                &self.rated_power_3,
                &self.utilization_3,
                &self.tangent_3,
            ),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn group(
    name: &str,
    efficiency: &str,
    power_factor: &str,
    voltage: &str,
    count: &str,
    rated_power: &str,
    utilization: &str,
    tangent: &str,
) -> ReceiverGroup {
    ReceiverGroup {
        name: name.trim().to_string(),
        efficiency: number_or_zero(efficiency),
        power_factor: number_or_zero(power_factor),
        voltage: number_or_zero(voltage),
        count: number_or_zero(count),
        rated_power: number_or_zero(rated_power),
        utilization: number_or_zero(utilization),
        tangent: number_or_zero(tangent),
    }
}

pub async fn index() -> Result<Html<String>, StatusCode> {
    render(IndexTemplate {
        form: IndexForm::default(),
        results: None,
    })
}

pub async fn submit(Form(form): Form<IndexForm>) -> Result<Html<String>, StatusCode> {
    let report = workshop_report(&form.groups());
    render(IndexTemplate {
        results: Some(WorkshopView::from_report(&report)),
        form,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorkshopRequest {
    pub groups: Vec<ReceiverGroup>,
}

pub async fn api_workshop(Json(request): Json<WorkshopRequest>) -> Json<WorkshopReport> {
    Json(workshop_report(&request.groups))
}

fn render(page: IndexTemplate) -> Result<Html<String>, StatusCode> {
    page.render().map(Html).map_err(|err| {
        tracing::error!("template render failed: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
