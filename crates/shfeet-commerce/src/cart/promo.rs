//! Promo codes.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// A code worth a percentage off the subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    code: String,
    discount_percent: u8,
}

impl PromoCode {
    /// Build a code. Blank codes and discounts above 100% are rejected.
    pub fn new(code: impl Into<String>, discount_percent: u8) -> Result<Self, CommerceError> {
        let code = code.into().trim().to_string();
        if code.is_empty() {
            return Err(CommerceError::InvalidPromoCode("code is empty".into()));
        }
        if discount_percent > 100 {
            return Err(CommerceError::InvalidPromoCode(format!(
                "{} discount of {}% exceeds 100%",
                code, discount_percent
            )));
        }
        Ok(Self {
            code,
            discount_percent,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    /// Case-insensitive comparison against shopper input.
    pub fn matches(&self, input: &str) -> bool {
        self.code.eq_ignore_ascii_case(input.trim())
    }
}

/// The set of codes the store accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromoTable {
    codes: Vec<PromoCode>,
}

impl PromoTable {
    pub fn new(codes: Vec<PromoCode>) -> Self {
        Self { codes }
    }

    /// Codes currently running on the storefront.
    pub fn storefront() -> Self {
        Self::new(vec![PromoCode {
            code: "SAVE10".to_string(),
            discount_percent: 10,
        }])
    }

    /// Find the code matching shopper input. Blank input never matches.
    pub fn lookup(&self, input: &str) -> Option<&PromoCode> {
        if input.trim().is_empty() {
            return None;
        }
        self.codes.iter().find(|c| c.matches(input))
    }

    pub fn codes(&self) -> &[PromoCode] {
        &self.codes
    }
}
