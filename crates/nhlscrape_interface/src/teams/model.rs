use serde::{Deserialize, Serialize};

use crate::table::Tabular;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub id: u32, // ID from the NHL API.
    pub name: String,
    pub city: String,
    pub abbreviation: String,
}

impl Tabular for Team {
    fn columns() -> &'static [&'static str] {
        &["id", "name", "city", "abbreviation"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.city.clone(),
            self.abbreviation.clone(),
        ]
    }
}
