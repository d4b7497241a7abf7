use crate::table::filter::Searchable;
use crate::table::TableRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 고객 모델
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub avatar: String,
    pub full_name: String,
    pub email: String,
    pub status: CustomerStatus,
    pub address: Address,
    pub phone_number: String,
    pub created_at: Option<DateTime<Utc>>,
}

// 주소
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub country: String,
    pub street: String,
}

// 고객 상태. 알 수 없는 값은 그대로 보존
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
    Other(String),
}

impl From<String> for CustomerStatus {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "active" => CustomerStatus::Active,
            "inactive" => CustomerStatus::Inactive,
            _ => CustomerStatus::Other(value),
        }
    }
}

impl From<CustomerStatus> for String {
    fn from(status: CustomerStatus) -> Self {
        match status {
            CustomerStatus::Active => "active".to_string(),
            CustomerStatus::Inactive => "inactive".to_string(),
            CustomerStatus::Other(value) => value,
        }
    }
}

// 삭제 결과
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteOutcome {
    pub success: bool,
}

impl TableRow for Customer {
    fn row_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Customer {
    fn search_text(&self) -> &str {
        &self.full_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_customer() {
        let customer: Customer = serde_json::from_value(serde_json::json!({
            "_id": "USR-010",
            "avatar": "/assets/avatar-10.png",
            "fullName": "Sofia Rivers",
            "email": "sofia@devias.io",
            "status": "Inactive",
            "address": { "city": "Hanoi", "country": "Vietnam" },
            "phoneNumber": "908-691-3242",
            "createdAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(customer.id, "USR-010");
        assert_eq!(customer.status, CustomerStatus::Inactive);
        assert_eq!(customer.address.city, "Hanoi");
        assert!(customer.address.street.is_empty());
        assert!(customer.created_at.is_some());
    }

    #[test]
    fn unknown_status_is_preserved() {
        let customer: Customer =
            serde_json::from_value(serde_json::json!({ "_id": "1", "status": "banned" })).unwrap();
        assert_eq!(customer.status, CustomerStatus::Other("banned".to_string()));
        assert_eq!(serde_json::to_value(&customer).unwrap()["status"], "banned");
    }
}
