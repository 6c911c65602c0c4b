use serde::{Serialize, Serializer};

/// Dense row-major table. Rows are time steps, columns are simulation runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Layout {
    RowMajor,
    ColumnMajor,
}

impl SimulationMatrix {
    pub(crate) fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    pub(crate) fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).map(move |row| self.get(row, col))
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn map_in_place(&mut self, f: impl Fn(f64) -> f64) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    /// Keeps the first `rows` rows.
    pub(crate) fn truncate_rows(&mut self, rows: usize) {
        if rows < self.rows {
            self.rows = rows;
            self.data.truncate(rows * self.cols);
        }
    }

    pub fn to_nested(&self, layout: Layout) -> Vec<Vec<f64>> {
        match layout {
            Layout::RowMajor => (0..self.rows).map(|r| self.row(r).to_vec()).collect(),
            Layout::ColumnMajor => (0..self.cols).map(|c| self.column(c).collect()).collect(),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceUnit {
    Currency,
    Millions,
}

impl BalanceUnit {
    pub fn divisor(self) -> f64 {
        match self {
            BalanceUnit::Currency => 1.0,
            BalanceUnit::Millions => 1_000_000.0,
        }
    }
}

/// Balances by elapsed month (rows `0..=12 * years`) and simulation run
/// (columns). Ruined cells hold `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceTable {
    pub(crate) matrix: SimulationMatrix,
    pub(crate) unit: BalanceUnit,
}

impl BalanceTable {
    pub fn matrix(&self) -> &SimulationMatrix {
        &self.matrix
    }

    pub fn unit(&self) -> BalanceUnit {
        self.unit
    }

    pub fn months(&self) -> usize {
        self.matrix.rows().saturating_sub(1)
    }

    pub fn simulations(&self) -> usize {
        self.matrix.cols()
    }

    pub fn is_ruined(&self, row: usize, col: usize) -> bool {
        self.matrix.get(row, col).is_nan()
    }

    pub fn to_nested(&self, layout: Layout) -> Vec<Vec<f64>> {
        self.matrix.to_nested(layout)
    }
}

/// Writes ruined cells as `null`.
pub fn serialize_cells<S: Serializer>(rows: &[Vec<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    let cells: Vec<Vec<Option<f64>>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| if v.is_finite() { Some(*v) } else { None })
                .collect()
        })
        .collect();
    cells.serialize(serializer)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuinPolicy {
    /// A column stays ruined from its first negative balance onward.
    #[default]
    Terminal,
    /// Only negative cells are masked; later months may recover.
    Snapshot,
}

#[derive(Debug, Clone)]
pub struct AccumulationInputs {
    pub start_capital: f64,
    pub return_mean: f64,
    pub return_stdev: f64,
    pub raise_mean: f64,
    pub raise_stdev: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    pub simulations: u32,
}

impl Default for AccumulationInputs {
    fn default() -> Self {
        Self {
            start_capital: 10_000.0,
            return_mean: 7.0,
            return_stdev: 15.0,
            raise_mean: 3.0,
            raise_stdev: 1.0,
            monthly_contribution: 500.0,
            years: 30,
            simulations: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DecumulationInputs {
    pub start_capital: f64,
    pub return_mean: f64,
    pub return_stdev: f64,
    pub inflation_mean: f64,
    pub inflation_stdev: f64,
    pub monthly_withdrawal: f64,
    /// Absolute noise on each monthly withdrawal, in currency units.
    pub withdrawal_stdev: f64,
    pub years: u32,
    pub simulations: u32,
    pub ruin: RuinPolicy,
}

pub const DEFAULT_WITHDRAWAL_STDEV: f64 = 0.05;

impl Default for DecumulationInputs {
    fn default() -> Self {
        Self {
            start_capital: 1_000_000.0,
            return_mean: 6.0,
            return_stdev: 12.0,
            inflation_mean: 2.5,
            inflation_stdev: 1.0,
            monthly_withdrawal: 4_000.0,
            withdrawal_stdev: DEFAULT_WITHDRAWAL_STDEV,
            years: 30,
            simulations: 100,
            ruin: RuinPolicy::Terminal,
        }
    }
}
