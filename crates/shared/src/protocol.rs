use serde::{Deserialize, Serialize};

use crate::domain::CustomerId;

/// `GET` lists every customer.
pub const LIST_CUSTOMERS_PATH: &str = "customers";
/// `POST` creates, `DELETE ?id=` removes.
pub const CUSTOMER_PATH: &str = "customer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "computador")]
    pub computer_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCustomerQuery {
    pub id: CustomerId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_uses_server_field_names() {
        let request = CreateCustomerRequest {
            name: "Carla".into(),
            email: "carla@example.com".into(),
            computer_label: "PC-03".into(),
        };
        let value = serde_json::to_value(&request).expect("encode");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Carla",
                "email": "carla@example.com",
                "computador": "PC-03",
            })
        );
    }
}
