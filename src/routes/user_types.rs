use serde::{Deserialize, Serialize};

use crate::models::RentalCounts;

// =========================================================
// User type (pie chart) types
// =========================================================

/// One slice of the user-type pie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    /// Summed rentals for this user type.
    pub count: u64,
    /// Fraction of the total in [0, 1]; 0 when the dataset sums to zero.
    pub share: f64,
}

/// Casual vs registered rentals over the filtered daily table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTypeBreakdown {
    pub slices: Vec<PieSlice>,
}

impl UserTypeBreakdown {
    pub fn from_rows<R: RentalCounts>(rows: &[R]) -> Self {
        let casual: u64 = rows.iter().map(|r| u64::from(r.casual())).sum();
        let registered: u64 = rows.iter().map(|r| u64::from(r.registered())).sum();
        let total = casual + registered;

        let share = |count: u64| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            }
        };

        Self {
            slices: vec![
                PieSlice {
                    label: "Unregistered".to_string(),
                    count: casual,
                    share: share(casual),
                },
                PieSlice {
                    label: "Registered".to_string(),
                    count: registered,
                    share: share(registered),
                },
            ],
        }
    }
}
