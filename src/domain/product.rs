use crate::error::{LoanError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A loan product offered in the catalog.
///
/// The calculator only reads products; their lifecycle belongs to the
/// catalog repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanProduct {
    pub id: u32,
    pub name: String,
    pub minimum_amount: Decimal,
    pub maximum_amount: Decimal,
    /// Fraction, e.g. 0.165 for 16.5%.
    pub annual_interest_rate: Decimal,
}

impl LoanProduct {
    pub fn from_new(id: u32, product: NewLoanProduct) -> Self {
        Self {
            id,
            name: product.name,
            minimum_amount: product.minimum_amount,
            maximum_amount: product.maximum_amount,
            annual_interest_rate: product.annual_interest_rate,
        }
    }

    /// Whether `amount` lies inside the product's inclusive bounds.
    pub fn allows(&self, amount: Decimal) -> bool {
        self.minimum_amount <= amount && amount <= self.maximum_amount
    }

    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.name,
            self.minimum_amount,
            self.maximum_amount,
            self.annual_interest_rate,
        )
    }
}

/// Product data submitted for creation, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLoanProduct {
    pub name: String,
    pub minimum_amount: Decimal,
    pub maximum_amount: Decimal,
    pub annual_interest_rate: Decimal,
}

impl NewLoanProduct {
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.name,
            self.minimum_amount,
            self.maximum_amount,
            self.annual_interest_rate,
        )
    }
}

/// Partial update. Absent fields keep their current value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanProductPatch {
    pub name: Option<String>,
    pub minimum_amount: Option<Decimal>,
    pub maximum_amount: Option<Decimal>,
    pub annual_interest_rate: Option<Decimal>,
}

impl LoanProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.minimum_amount.is_none()
            && self.maximum_amount.is_none()
            && self.annual_interest_rate.is_none()
    }

    /// Returns the patched product, leaving `product` untouched when the
    /// merged result is invalid.
    pub fn apply(&self, product: &LoanProduct) -> Result<LoanProduct> {
        let patched = LoanProduct {
            id: product.id,
            name: self.name.clone().unwrap_or_else(|| product.name.clone()),
            minimum_amount: self.minimum_amount.unwrap_or(product.minimum_amount),
            maximum_amount: self.maximum_amount.unwrap_or(product.maximum_amount),
            annual_interest_rate: self
                .annual_interest_rate
                .unwrap_or(product.annual_interest_rate),
        };
        patched.validate()?;
        Ok(patched)
    }
}

fn validate_fields(name: &str, minimum: Decimal, maximum: Decimal, rate: Decimal) -> Result<()> {
    if name.trim().is_empty() {
        return Err(LoanError::Validation(
            "Product name must not be empty".to_string(),
        ));
    }
    if minimum.is_sign_negative() && !minimum.is_zero() {
        return Err(LoanError::Validation(
            "Minimum amount must not be negative".to_string(),
        ));
    }
    if maximum < minimum {
        return Err(LoanError::Validation(
            "Maximum amount must not be below the minimum amount".to_string(),
        ));
    }
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(LoanError::Validation(
            "Annual interest rate must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn consumo() -> LoanProduct {
        LoanProduct {
            id: 3,
            name: "Crédito de Consumo".to_string(),
            minimum_amount: dec!(1000000),
            maximum_amount: dec!(25000000),
            annual_interest_rate: dec!(0.21),
        }
    }

    #[test]
    fn test_allows_is_inclusive() {
        let product = consumo();
        assert!(product.allows(dec!(1000000)));
        assert!(product.allows(dec!(25000000)));
        assert!(!product.allows(dec!(999999.99)));
        assert!(!product.allows(dec!(25000000.01)));
    }

    #[test]
    fn test_validation_rejects_inverted_bounds() {
        let mut product = consumo();
        product.maximum_amount = dec!(10);
        assert!(matches!(product.validate(), Err(LoanError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_blank_name_and_negative_rate() {
        let blank = NewLoanProduct {
            name: "  ".to_string(),
            minimum_amount: dec!(0),
            maximum_amount: dec!(1),
            annual_interest_rate: dec!(0.1),
        };
        assert!(blank.validate().is_err());

        let negative = NewLoanProduct {
            name: "Negativo".to_string(),
            annual_interest_rate: dec!(-0.1),
            ..blank
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_patch_keeps_id_and_unset_fields() {
        let patch = LoanProductPatch {
            annual_interest_rate: Some(dec!(0.18)),
            ..Default::default()
        };
        let patched = patch.apply(&consumo()).unwrap();
        assert_eq!(patched.id, 3);
        assert_eq!(patched.name, "Crédito de Consumo");
        assert_eq!(patched.annual_interest_rate, dec!(0.18));
    }

    #[test]
    fn test_patch_rejects_invalid_merge() {
        let patch = LoanProductPatch {
            minimum_amount: Some(dec!(30000000)),
            ..Default::default()
        };
        assert!(patch.apply(&consumo()).is_err());
        assert!(!patch.is_empty());
        assert!(LoanProductPatch::default().is_empty());
    }
}
