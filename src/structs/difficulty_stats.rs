use serde::{Deserialize, Serialize};
use crate::helpers::text_helper::percentage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyStats {
    pub name: String,
    pub count: usize,
}

impl DifficultyStats {
    pub fn new(name: &str, count: usize) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }

    pub fn percentage_of(&self, total: usize) -> f64 {
        percentage(self.count, total)
    }

    /// Pie-slice label, e.g. `Easy: 40%`. Halves round up.
    pub fn label(&self, total: usize) -> String {
        format!("{}: {}%", self.name, self.percentage_of(total).round() as u64)
    }
}
