//! Shipping address and the states the store delivers to.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// The only country the store ships to.
pub const SHIPPING_COUNTRY: &str = "Nigeria";

/// State value that also requires a street address.
pub const ABUJA: &str = "abuja";

/// Delivery states as (value, label). The FCT uses the value `abuja`.
pub const NIGERIAN_STATES: [(&str, &str); 37] = [
    ("abia", "Abia"),
    ("adamawa", "Adamawa"),
    ("akwa-ibom", "Akwa Ibom"),
    ("anambra", "Anambra"),
    ("bauchi", "Bauchi"),
    ("bayelsa", "Bayelsa"),
    ("benue", "Benue"),
    ("borno", "Borno"),
    ("cross-river", "Cross River"),
    ("delta", "Delta"),
    ("ebonyi", "Ebonyi"),
    ("edo", "Edo"),
    ("ekiti", "Ekiti"),
    ("enugu", "Enugu"),
    ("abuja", "Abuja (FCT)"),
    ("gombe", "Gombe"),
    ("imo", "Imo"),
    ("jigawa", "Jigawa"),
    ("kaduna", "Kaduna"),
    ("kano", "Kano"),
    ("katsina", "Katsina"),
    ("kebbi", "Kebbi"),
    ("kogi", "Kogi"),
    ("kwara", "Kwara"),
    ("lagos", "Lagos"),
    ("nasarawa", "Nasarawa"),
    ("niger", "Niger"),
    ("ogun", "Ogun"),
    ("ondo", "Ondo"),
    ("osun", "Osun"),
    ("oyo", "Oyo"),
    ("plateau", "Plateau"),
    ("rivers", "Rivers"),
    ("sokoto", "Sokoto"),
    ("taraba", "Taraba"),
    ("yobe", "Yobe"),
    ("zamfara", "Zamfara"),
];

/// Label for a state value, e.g. `akwa-ibom` → "Akwa Ibom".
pub fn state_label(value: &str) -> Option<&'static str> {
    NIGERIAN_STATES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

/// Where an order is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub email: String,
    pub full_name: String,
    /// Street address; only required for Abuja deliveries.
    #[serde(default)]
    pub address: String,
    pub city: String,
    /// One of the values in [`NIGERIAN_STATES`].
    pub state: String,
    pub country: String,
    pub phone: String,
}

impl ShippingAddress {
    /// Fields that are blank but required. Street address joins the list
    /// when the state is Abuja.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut required = vec![
            ("email", &self.email),
            ("fullName", &self.full_name),
            ("city", &self.city),
            ("state", &self.state),
            ("phone", &self.phone),
        ];
        if self.state.trim().eq_ignore_ascii_case(ABUJA) {
            required.push(("address", &self.address));
        }

        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check the address and return it normalised: fields trimmed, state
    /// lowercased, country set to Nigeria.
    pub fn validated(&self) -> Result<ShippingAddress, CommerceError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }

        let state = self.state.trim().to_lowercase();
        if state_label(&state).is_none() {
            return Err(CommerceError::ValidationError(format!(
                "we do not deliver to '{}'",
                self.state
            )));
        }

        Ok(ShippingAddress {
            email: self.email.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state,
            country: SHIPPING_COUNTRY.to_string(),
            phone: self.phone.trim().to_string(),
        })
    }

    /// Format as a single line.
    pub fn one_line(&self) -> String {
        let state: &str = match state_label(&self.state) {
            Some(label) => label,
            None => &self.state,
        };
        [self.address.as_str(), self.city.as_str(), state, self.country.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lagos() -> ShippingAddress {
        ShippingAddress {
            email: "ada@example.com".into(),
            full_name: "Ada Obi".into(),
            city: "Ikeja".into(),
            state: "lagos".into(),
            phone: "08012345678".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_address_without_street() {
        let address = lagos().validated().unwrap();
        assert_eq!(address.country, "Nigeria");
        assert_eq!(address.one_line(), "Ikeja, Lagos, Nigeria");
    }

    #[test]
    fn test_missing_fields_listed() {
        let address = ShippingAddress {
            email: " ".into(),
            phone: String::new(),
            ..lagos()
        };
        assert_eq!(address.missing_fields(), vec!["email", "phone"]);
        match address.validated() {
            Err(CommerceError::CheckoutIncomplete(missing)) => assert_eq!(missing, "email, phone"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_abuja_requires_street_address() {
        let mut address = ShippingAddress {
            state: "abuja".into(),
            city: "Garki".into(),
            ..lagos()
        };
        assert_eq!(address.missing_fields(), vec!["address"]);

        address.address = "12 Ahmadu Bello Way".into();
        let address = address.validated().unwrap();
        assert_eq!(address.one_line(), "12 Ahmadu Bello Way, Garki, Abuja (FCT), Nigeria");
    }

    #[test]
    fn test_unknown_state_rejected() {
        let address = ShippingAddress {
            state: "accra".into(),
            ..lagos()
        };
        assert!(matches!(
            address.validated(),
            Err(CommerceError::ValidationError(_))
        ));
    }

    #[test]
    fn test_state_list() {
        assert_eq!(NIGERIAN_STATES.len(), 37);
        assert_eq!(state_label("akwa-ibom"), Some("Akwa Ibom"));
        assert_eq!(state_label("abuja"), Some("Abuja (FCT)"));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(lagos()).unwrap();
        assert_eq!(json["fullName"], "Ada Obi");
    }
}
