//! Clients coached by a trainer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Emoji or avatar URL shown next to the name.
    #[serde(default)]
    pub avatar: String,
    pub join_date: NaiveDate,
    pub trainer_id: String,
}

impl Client {
    /// First name for compact display.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        let client = Client {
            id: "client-1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            avatar: String::new(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            trainer_id: "trainer-1".to_string(),
        };
        assert_eq!(client.first_name(), "Sarah");
    }
}
