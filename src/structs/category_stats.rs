use serde::{Deserialize, Serialize};
use crate::helpers::text_helper::percentage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub name: String,
    pub count: usize,
}

impl CategoryStats {
    pub fn new(name: &str, count: usize) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }

    pub fn percentage_of(&self, total: usize) -> f64 {
        percentage(self.count, total)
    }
}
