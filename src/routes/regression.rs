use serde::{Deserialize, Serialize};

// =========================================================
// Regression types
// =========================================================

/// One fitted model term with its inference statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coefficient {
    /// Term name (`const` for the intercept, else the covariate name).
    pub name: String,
    pub estimate: f64,
    pub std_error: f64,
    pub t_stat: f64,
    /// Two-tailed p-value against the residual degrees of freedom.
    pub p_value: f64,
}

/// One diagnostic scatter point: covariate value vs log-transformed cnt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Straight line overlaid on a diagnostic scatter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FitLine {
    pub slope: f64,
    pub intercept: f64,
}

/// Scatter + fit line for one weather covariate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterPanel {
    /// Covariate name: `weathersit`, `temp`, `hum`, or `windspeed`.
    pub covariate: String,
    pub points: Vec<ScatterPoint>,
    pub fit: FitLine,
}

/// The OLS model summary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionSummary {
    /// Intercept first, then weathersit, temp, hum, windspeed.
    pub coefficients: Vec<Coefficient>,
    pub r_squared: f64,
    pub residual_std_error: f64,
    /// Number of observations the model was fitted on.
    pub observations: usize,
    /// Residual degrees of freedom, `observations - 5`.
    pub df_residual: usize,
}

/// Complete OLS fit of ln(cnt) on the four weather covariates: the
/// summary table plus the diagnostic data for the 2x2 scatter grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionData {
    pub summary: RegressionSummary,
    pub scatter: Vec<ScatterPanel>,
}
