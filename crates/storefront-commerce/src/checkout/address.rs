//! Shipping address type.

use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// A shipping address on the customer's account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Unique address identifier.
    pub id: AddressId,
    /// Recipient name.
    pub recipient: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address line.
    pub street: String,
    /// Ward / district.
    #[serde(default)]
    pub district: Option<String>,
    /// City or province.
    pub city: String,
    /// Whether this is the account's default address.
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    /// Check if the address has everything needed to ship to it.
    pub fn is_complete(&self) -> bool {
        !self.recipient.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.street.trim().is_empty()
            && !self.city.trim().is_empty()
    }

    /// Single-line display form.
    pub fn display_line(&self) -> String {
        match &self.district {
            Some(district) => format!("{}, {}, {}", self.street, district, self.city),
            None => format!("{}, {}", self.street, self.city),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            id: AddressId::new("addr-1"),
            recipient: "Nguyen Van A".to_string(),
            phone: "0900000000".to_string(),
            street: "1 Le Loi".to_string(),
            district: Some("District 1".to_string()),
            city: "Ho Chi Minh City".to_string(),
            is_default: true,
        }
    }

    #[test]
    fn test_complete_address() {
        assert!(address().is_complete());
    }

    #[test]
    fn test_incomplete_address() {
        let mut a = address();
        a.street = "  ".to_string();
        assert!(!a.is_complete());
    }

    #[test]
    fn test_display_line() {
        assert_eq!(
            address().display_line(),
            "1 Le Loi, District 1, Ho Chi Minh City"
        );
    }
}
