use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TriviaCategory {
    pub id: u32,
    pub name: String,
}
