//! Ordinary least squares regression of log daily rentals on weather.
//!
//! The model is `ln(cnt) ~ const + weathersit + temp + hum + windspeed`,
//! fitted on the full daily table. The solve goes through an SVD rather
//! than the raw normal equations; the weather columns can be nearly
//! collinear and the SVD keeps the solution well conditioned. The same
//! decomposition yields the pseudo-inverse of XᵀX for the coefficient
//! covariance.

use nalgebra::{DMatrix, DVector};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::api::{
    Coefficient, FitLine, RegressionData, RegressionSummary, ScatterPanel, ScatterPoint,
};
use crate::models::DailyRecord;

use super::error::AnalysisError;

/// The four weather covariates, in design-matrix column order.
pub const COVARIATES: [&str; 4] = ["weathersit", "temp", "hum", "windspeed"];

/// Model parameters: intercept plus the four covariates.
const N_PARAMS: usize = 5;

/// Singular values below this are treated as zero.
const SVD_TOL: f64 = 1e-10;

fn covariate_value(row: &DailyRecord, index: usize) -> f64 {
    match index {
        0 => f64::from(row.weathersit),
        1 => row.temp,
        2 => row.hum,
        3 => row.windspeed,
        _ => unreachable!("covariate index out of range"),
    }
}

/// Simple least-squares line through a scatter, for the regplot-style
/// overlay on the diagnostic charts.
fn univariate_fit(points: &[ScatterPoint]) -> FitLine {
    let n = points.len() as f64;
    let mut x_sum = 0.0;
    let mut y_sum = 0.0;
    let mut x2_sum = 0.0;
    let mut xy_sum = 0.0;
    for p in points {
        x_sum += p.x;
        y_sum += p.y;
        x2_sum += p.x * p.x;
        xy_sum += p.x * p.y;
    }

    let denom = n * x2_sum - x_sum * x_sum;
    if denom.abs() < f64::EPSILON {
        // degenerate x column: flat line through the mean
        return FitLine {
            slope: 0.0,
            intercept: y_sum / n,
        };
    }

    let slope = (n * xy_sum - x_sum * y_sum) / denom;
    FitLine {
        slope,
        intercept: (y_sum - slope * x_sum) / n,
    }
}

/// Fit the OLS model on the full daily table.
///
/// Fails with [`AnalysisError::InvalidResponseValue`] on a zero rental
/// count (no defined logarithm) and with
/// [`AnalysisError::UnderdeterminedModel`] when there are not enough rows
/// for a positive residual degree of freedom. Refitting on identical
/// input is deterministic.
pub fn fit_model(rows: &[DailyRecord]) -> Result<RegressionData, AnalysisError> {
    let n = rows.len();
    let underdetermined = || AnalysisError::UnderdeterminedModel {
        rows: n,
        params: N_PARAMS,
    };
    if n <= N_PARAMS {
        return Err(underdetermined());
    }

    // Response: ln(cnt). A zero count must fail loudly instead of
    // feeding -inf into the solve.
    let mut y_values = Vec::with_capacity(n);
    for row in rows {
        if row.cnt == 0 {
            return Err(AnalysisError::InvalidResponseValue {
                date: row.date,
                cnt: row.cnt,
            });
        }
        y_values.push(f64::from(row.cnt).ln());
    }

    let x = DMatrix::from_fn(n, N_PARAMS, |i, j| {
        if j == 0 {
            1.0
        } else {
            covariate_value(&rows[i], j - 1)
        }
    });
    let y = DVector::from_vec(y_values);

    let svd = x.clone().svd(true, true);
    let beta = svd.solve(&y, SVD_TOL).map_err(|_| underdetermined())?;

    let fitted = &x * &beta;
    let residuals = &y - &fitted;
    let sse = residuals.norm_squared();
    let y_mean = y.mean();
    let sst: f64 = y.iter().map(|v| (v - y_mean).powi(2)).sum();
    let r_squared = if sst > 0.0 { 1.0 - sse / sst } else { 0.0 };

    let df_residual = n - N_PARAMS;
    let sigma2 = sse / df_residual as f64;

    // Covariance of beta: sigma^2 * (X^T X)^+ from the SVD factors.
    let v_t = svd.v_t.as_ref().ok_or_else(underdetermined)?;
    let mut xtx_inv = DMatrix::zeros(N_PARAMS, N_PARAMS);
    for (k, &s) in svd.singular_values.iter().enumerate() {
        if s > SVD_TOL {
            let vk = v_t.row(k);
            xtx_inv += vk.transpose() * vk / (s * s);
        }
    }
    let covariance = xtx_inv * sigma2;

    let t_dist = StudentsT::new(0.0, 1.0, df_residual as f64).map_err(|_| underdetermined())?;

    let mut coefficients = Vec::with_capacity(N_PARAMS);
    for j in 0..N_PARAMS {
        let estimate = beta[j];
        let std_error = covariance[(j, j)].sqrt();
        let t_stat = estimate / std_error;
        let p_value = 2.0 * t_dist.sf(t_stat.abs());
        let name = if j == 0 { "const" } else { COVARIATES[j - 1] };
        coefficients.push(Coefficient {
            name: name.to_string(),
            estimate,
            std_error,
            t_stat,
            p_value,
        });
    }

    let scatter = COVARIATES
        .iter()
        .enumerate()
        .map(|(index, &name)| {
            let points: Vec<ScatterPoint> = rows
                .iter()
                .zip(y.iter())
                .map(|(row, &y_i)| ScatterPoint {
                    x: covariate_value(row, index),
                    y: y_i,
                })
                .collect();
            let fit = univariate_fit(&points);
            ScatterPanel {
                covariate: name.to_string(),
                points,
                fit,
            }
        })
        .collect();

    Ok(RegressionData {
        summary: RegressionSummary {
            coefficients,
            r_squared,
            residual_std_error: sigma2.sqrt(),
            observations: n,
            df_residual,
        },
        scatter,
    })
}
