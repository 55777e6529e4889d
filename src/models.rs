use serde::{Deserialize, Serialize};

/// A customer record, keyed by `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[cfg(test)]
impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            phone_number: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Request body for PUT and PATCH; the customer name comes from the path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerData {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl CustomerData {
    pub fn into_customer(self, name: impl Into<String>) -> Customer {
        Customer {
            name: name.into(),
            address: self.address,
            phone_number: self.phone_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_wire_format() {
        let customer = Customer::new("Olaf Stapledon").with_phone_number("123");

        let json = serde_json::to_value(&customer).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Olaf Stapledon",
                "address": null,
                "phoneNumber": "123"
            })
        );
    }

    #[test]
    fn test_customer_missing_optional_fields() {
        let customer: Customer = serde_json::from_str(r#"{"name": "Conan Doyle"}"#).unwrap();

        assert_eq!(customer, Customer::new("Conan Doyle"));
    }

    #[test]
    fn test_customer_requires_name() {
        let result = serde_json::from_str::<Customer>(r#"{"address": "NZ"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_customer_data_ignores_body_name() {
        let data: CustomerData =
            serde_json::from_str(r#"{"name": "Someone Else", "address": "NZ"}"#).unwrap();

        let customer = data.into_customer("Olaf Stapledon");

        assert_eq!(customer, Customer::new("Olaf Stapledon").with_address("NZ"));
    }
}
