//! Demand calculation for a workshop power group: three interactive
//! electric-receiver groups on top of a surveyed, non-interactive base load
//! that enters the sums as fixed terms.

use serde::{Deserialize, Serialize};

use crate::rounding::round_to;

pub const DEMAND_FACTOR: f64 = 1.25;
pub const WORKSHOP_CAPACITY_COEFFICIENT: f64 = 0.7;

// Surveyed base load counted at group level.
const BASE_RATED_POWER: f64 = 28.0 + 168.0 + 20.0 + 64.0 + 20.0;
const BASE_RATED_POWER_SQ: f64 =
    14.0 * 14.0 * 2.0 + 42.0 * 42.0 * 4.0 + 20.0 * 20.0 + 32.0 * 32.0 * 2.0 + 20.0 * 20.0;
const BASE_UTILIZED_POWER: f64 = 3.36 + 25.2 + 10.0 + 12.8 + 13.0;
const BASE_REACTIVE_POWER: f64 = 3.36 + 33.5 + 12.8 + 7.5 + 9.5;

// Additional surveyed groups counted only at workshop level.
const WORKSHOP_EXTRA_RATED_POWER: f64 = 456.0 * 2.0 + 465.0 + 200.0 + 240.0;
const WORKSHOP_EXTRA_RATED_POWER_SQ: f64 = 14792.0 * 3.0 + 20000.0 + 28800.0;
const WORKSHOP_EXTRA_UTILIZED_POWER: f64 = 95.1 * 3.0 + 40.0 + 192.0;

// Rated busbar loads scaled by the workshop active-capacity coefficient.
const BUSBAR_ACTIVE_RATED_KW: f64 = 752.0;
const BUSBAR_REACTIVE_RATED_KVAR: f64 = 657.0;

/// One electric-receiver group as entered on the form. Efficiency and power
/// factor are captured for the record but do not enter the demand formulas;
/// voltage participates only through the first group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiverGroup {
    pub name: String,
    pub efficiency: f64,
    pub power_factor: f64,
    pub voltage: f64,
    pub count: f64,
    pub rated_power: f64,
    pub utilization: f64,
    pub tangent: f64,
}

/// Per-group intermediates the aggregate sums are built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupDerived {
    /// n · Pn
    pub rated_power: f64,
    /// n · Pn²
    pub rated_power_sq: f64,
    /// n · Pn · Kv
    pub utilized_power: f64,
    /// tg · utilized, rounded to one decimal
    pub reactive_power: f64,
}

impl GroupDerived {
    pub fn from_group(group: &ReceiverGroup) -> Self {
        let rated_power = group.count * group.rated_power;
        let utilized_power = rated_power * group.utilization;
        Self {
            rated_power,
            rated_power_sq: group.count * group.rated_power.powi(2),
            utilized_power,
            // Rounded here, not at display time: the rounded value feeds the
            // reactive-load sum and shifts its digits downstream.
            reactive_power: round_to(group.tangent * utilized_power, 1),
        }
    }
}

/// Componentwise sums over the interactive groups, before any fixed terms.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupTotals {
    pub rated_power: f64,
    pub rated_power_sq: f64,
    pub utilized_power: f64,
    pub reactive_power: f64,
}

impl GroupTotals {
    pub fn from_rows(rows: &[GroupDerived]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            rated_power: acc.rated_power + row.rated_power,
            rated_power_sq: acc.rated_power_sq + row.rated_power_sq,
            utilized_power: acc.utilized_power + row.utilized_power,
            reactive_power: acc.reactive_power + row.reactive_power,
        })
    }
}

pub fn utilization_factor(totals: &GroupTotals) -> f64 {
    let rated = totals.rated_power + BASE_RATED_POWER;
    if rated == 0.0 {
        return 0.0;
    }
    (totals.utilized_power + BASE_UTILIZED_POWER) / rated
}

pub fn effective_receiver_count(totals: &GroupTotals) -> f64 {
    let rated_sq = totals.rated_power_sq + BASE_RATED_POWER_SQ;
    if rated_sq == 0.0 {
        return 0.0;
    }
    (totals.rated_power + BASE_RATED_POWER).powi(2) / rated_sq
}

pub fn active_load(totals: &GroupTotals) -> f64 {
    DEMAND_FACTOR * (totals.utilized_power + BASE_UTILIZED_POWER)
}

pub fn reactive_load(totals: &GroupTotals) -> f64 {
    DEMAND_FACTOR * (totals.reactive_power + BASE_REACTIVE_POWER)
}

pub fn full_power(active: f64, reactive: f64) -> f64 {
    (active.powi(2) + reactive.powi(2)).sqrt()
}

pub fn group_current(active: f64, voltage: f64) -> f64 {
    if voltage == 0.0 {
        return 0.0;
    }
    active / voltage
}

pub fn workshop_utilization_factor(totals: &GroupTotals) -> f64 {
    let rated = totals.rated_power + BASE_RATED_POWER + WORKSHOP_EXTRA_RATED_POWER;
    if rated == 0.0 {
        return 0.0;
    }
    (totals.utilized_power + BASE_UTILIZED_POWER + WORKSHOP_EXTRA_UTILIZED_POWER) / rated
}

pub fn workshop_effective_receiver_count(totals: &GroupTotals) -> f64 {
    let rated_sq = totals.rated_power_sq + BASE_RATED_POWER_SQ + WORKSHOP_EXTRA_RATED_POWER_SQ;
    if rated_sq == 0.0 {
        return 0.0;
    }
    (totals.rated_power + BASE_RATED_POWER + WORKSHOP_EXTRA_RATED_POWER).powi(2) / rated_sq
}

pub fn busbar_active_load(capacity_coefficient: f64) -> f64 {
    BUSBAR_ACTIVE_RATED_KW * capacity_coefficient
}

pub fn busbar_reactive_load(capacity_coefficient: f64) -> f64 {
    BUSBAR_REACTIVE_RATED_KVAR * capacity_coefficient
}

/// Every figure reported for one submission of receiver groups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkshopReport {
    pub utilization_factor: f64,
    pub effective_receiver_count: f64,
    pub demand_factor: f64,
    pub active_load: f64,
    pub reactive_load: f64,
    pub full_power: f64,
    pub group_current: f64,
    pub workshop_utilization_factor: f64,
    pub workshop_effective_receiver_count: f64,
    pub capacity_coefficient: f64,
    pub busbar_active_load: f64,
    pub busbar_reactive_load: f64,
    pub busbar_full_power: f64,
    pub busbar_current: f64,
}

pub fn workshop_report(groups: &[ReceiverGroup]) -> WorkshopReport {
    let derived: Vec<GroupDerived> = groups.iter().map(GroupDerived::from_group).collect();
    let totals = GroupTotals::from_rows(&derived);

    // Voltage is taken from the first group's entry only.
    let voltage = groups.first().map(|group| group.voltage).unwrap_or(0.0);

    let active = active_load(&totals);
    let reactive = reactive_load(&totals);
    let busbar_active = busbar_active_load(WORKSHOP_CAPACITY_COEFFICIENT);
    let busbar_reactive = busbar_reactive_load(WORKSHOP_CAPACITY_COEFFICIENT);

    WorkshopReport {
        utilization_factor: utilization_factor(&totals),
        effective_receiver_count: effective_receiver_count(&totals),
        demand_factor: DEMAND_FACTOR,
        active_load: active,
        reactive_load: reactive,
        full_power: full_power(active, reactive),
        group_current: group_current(active, voltage),
        workshop_utilization_factor: workshop_utilization_factor(&totals),
        workshop_effective_receiver_count: workshop_effective_receiver_count(&totals),
        capacity_coefficient: WORKSHOP_CAPACITY_COEFFICIENT,
        busbar_active_load: busbar_active,
        busbar_reactive_load: busbar_reactive,
        busbar_full_power: full_power(busbar_active, busbar_reactive),
        busbar_current: group_current(busbar_active, voltage),
    }
}
