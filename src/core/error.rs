use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("invalid horizon: years must be > 0, got {0}")]
    InvalidHorizon(u32),
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SimulationError>;

impl SimulationError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl From<SimulationError> for String {
    fn from(e: SimulationError) -> Self {
        e.to_string()
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::parameter(name, format!("must be finite, got {value}")))
    }
}

pub(crate) fn ensure_stdev(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(SimulationError::parameter(
            name,
            format!("must be >= 0, got {value}"),
        ));
    }
    Ok(())
}
