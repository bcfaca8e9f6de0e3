use enerlab_core::loads::WorkshopReport;

/// Workshop figures formatted for the page. Precision varies per field: the
/// utilization factor carries four decimals, full power three, the busbar
/// loads one, and the effective receiver count is rounded up to a whole
/// number of receivers.
pub struct WorkshopView {
    pub utilization_factor: String,
    pub effective_receiver_count: String,
    pub demand_factor: String,
    pub active_load: String,
    pub reactive_load: String,
    pub full_power: String,
    pub group_current: String,
    pub workshop_utilization_factor: String,
    pub workshop_effective_receiver_count: String,
    pub capacity_coefficient: String,
    pub busbar_active_load: String,
    pub busbar_reactive_load: String,
    pub busbar_full_power: String,
    pub busbar_current: String,
}

impl WorkshopView {
    pub fn from_report(report: &WorkshopReport) -> Self {
        Self {
            utilization_factor: format!("{:.4}", report.utilization_factor),
            effective_receiver_count: format!("{:.0}", report.effective_receiver_count.ceil()),
            demand_factor: format!("{:.2}", report.demand_factor),
            active_load: format!("{:.2}", report.active_load),
            reactive_load: format!("{:.2}", report.reactive_load),
            full_power: format!("{:.3}", report.full_power),
            group_current: format!("{:.2}", report.group_current),
            workshop_utilization_factor: format!("{:.2}", report.workshop_utilization_factor),
            workshop_effective_receiver_count: format!(
                "{:.2}",
                report.workshop_effective_receiver_count
            ),
            capacity_coefficient: format!("{:.1}", report.capacity_coefficient),
            busbar_active_load: format!("{:.1}", report.busbar_active_load),
            busbar_reactive_load: format!("{:.1}", report.busbar_reactive_load),
            busbar_full_power: format!("{:.1}", report.busbar_full_power),
            busbar_current: format!("{:.2}", report.busbar_current),
        }
    }
}
