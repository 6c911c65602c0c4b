//! Chart-ready views of a [`BalanceTable`]: time axes, percentile bands and
//! the survival curve. Rendering itself happens in the web client.

use serde::Serialize;

use crate::core::BalanceTable;

/// Half-width of the band around the solvency threshold that counts as marginal.
pub const MARGINAL_BAND: f64 = 2.5;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SolvencyBand {
    Comfortable,
    Marginal,
    AtRisk,
}

#[derive(Copy, Clone, Debug)]
pub struct AccumulationAxis {
    pub start_year: i32,
    pub birth_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentileBands {
    pub p10: Vec<f64>,
    pub median: Vec<f64>,
    pub p90: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulationChart {
    pub title: String,
    pub x: Vec<f64>,
    pub ticks: Vec<AxisTick>,
    pub bands: PercentileBands,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurvivalPoint {
    pub percent: f64,
    pub band: SolvencyBand,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecumulationChart {
    pub title: String,
    pub survival_title: String,
    pub x: Vec<f64>,
    pub ticks: Vec<AxisTick>,
    pub bands: PercentileBands,
    pub scenario_percent: f64,
    pub survival: Vec<SurvivalPoint>,
    pub final_survival_percent: f64,
}

pub fn accumulation_chart(table: &BalanceTable, axis: AccumulationAxis) -> AccumulationChart {
    let origin = f64::from(axis.start_year);
    let ticks = (0..=table.months() / 12)
        .map(|year| {
            let calendar_year = axis.start_year + year as i32;
            let label = match axis.birth_year {
                Some(birth) => format!("{calendar_year}\n({})", calendar_year - birth),
                None => calendar_year.to_string(),
            };
            AxisTick {
                value: f64::from(calendar_year),
                label,
            }
        })
        .collect();

    AccumulationChart {
        title: "Projected retirement savings balance by year (age)".to_string(),
        x: month_axis(table, origin),
        ticks,
        bands: PercentileBands::from_table(table),
    }
}

pub fn decumulation_chart(
    table: &BalanceTable,
    retire_age: u32,
    scenario_percent: f64,
) -> DecumulationChart {
    let survival: Vec<SurvivalPoint> = survival_percentages(table)
        .into_iter()
        .map(|percent| SurvivalPoint {
            percent,
            band: classify_survival(percent, scenario_percent),
        })
        .collect();
    let final_survival_percent = survival.last().map(|p| p.percent).unwrap_or(0.0);
    let years = table.months() / 12;

    DecumulationChart {
        title: format!("Projected value of capital over {years} years"),
        survival_title: "Percent of scenarios still paying out".to_string(),
        x: month_axis(table, f64::from(retire_age)),
        ticks: (0..=years)
            .map(|year| {
                let age = retire_age + year as u32;
                AxisTick {
                    value: f64::from(age),
                    label: age.to_string(),
                }
            })
            .collect(),
        bands: PercentileBands::from_table(table),
        scenario_percent,
        survival,
        final_survival_percent,
    }
}

fn month_axis(table: &BalanceTable, origin: f64) -> Vec<f64> {
    (0..table.matrix().rows())
        .map(|month| origin + month as f64 / 12.0)
        .collect()
}

/// Share of runs with a positive balance at each month, in percent. Ruined
/// cells count as insolvent.
pub fn survival_percentages(table: &BalanceTable) -> Vec<f64> {
    let m = table.matrix();
    let total = m.cols() as f64;
    (0..m.rows())
        .map(|row| {
            let solvent = m.row(row).iter().filter(|v| **v > 0.0).count();
            solvent as f64 / total * 100.0
        })
        .collect()
}

pub fn classify_survival(percent: f64, threshold: f64) -> SolvencyBand {
    if percent > threshold + MARGINAL_BAND {
        SolvencyBand::Comfortable
    } else if percent < threshold - MARGINAL_BAND {
        SolvencyBand::AtRisk
    } else {
        SolvencyBand::Marginal
    }
}

impl PercentileBands {
    /// Ruined cells enter the distribution as a zero balance.
    pub fn from_table(table: &BalanceTable) -> Self {
        let m = table.matrix();
        let mut bands = Self {
            p10: Vec::with_capacity(m.rows()),
            median: Vec::with_capacity(m.rows()),
            p90: Vec::with_capacity(m.rows()),
        };
        let mut scratch = Vec::with_capacity(m.cols());
        for row in 0..m.rows() {
            scratch.clear();
            scratch.extend(m.row(row).iter().map(|v| if v.is_nan() { 0.0 } else { *v }));
            bands.p10.push(percentile(&mut scratch, 10.0));
            bands.median.push(percentile(&mut scratch, 50.0));
            bands.p90.push(percentile(&mut scratch, 90.0));
        }
        bands
    }
}

pub fn percentile(values: &mut [f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len();
    if n == 1 {
        return values[0];
    }

    let rank = (p / 100.0) * (n as f64 - 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        values[lower]
    } else {
        let w = rank - lower as f64;
        values[lower] * (1.0 - w) + values[upper] * w
    }
}
