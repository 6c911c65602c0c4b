mod engine;
mod error;
mod random;
mod types;

pub use engine::{compound_step, normalize_percent, simulate_accumulation, simulate_decumulation};
pub use error::{Result, SimulationError};
pub use random::{generate_noise_matrix, seeded_rng};
pub use types::{
    AccumulationInputs, BalanceTable, BalanceUnit, DEFAULT_WITHDRAWAL_STDEV, DecumulationInputs,
    Layout, RuinPolicy, SimulationMatrix, serialize_cells,
};
