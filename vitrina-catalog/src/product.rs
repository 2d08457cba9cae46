use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Longest product name the catalog accepts, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Smallest base price the catalog accepts.
pub const MIN_PRICE: Decimal = dec!(0.01);

/// Product-related errors
///
/// Every variant is a construction-time validation failure; all other
/// operations on a constructed product are total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("Product name cannot be empty or whitespace")]
    EmptyName,

    #[error("Product name is too long: {len} characters (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Product price cannot be negative: {price}")]
    NegativePrice { price: Decimal },

    #[error("Product price must be at least {min}: got {price}")]
    PriceTooLow { price: Decimal, min: Decimal },
}

/// One catalog item and its pricing rule.
///
/// Prices and percentages are `Decimal` so discount math is exact.
/// Construction is the sole validation gate: a `Product` is never observable
/// in an invalid state, though fields stay public and mutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub base_price: Decimal,
    /// Percentage off the base price. Zero means no discount.
    #[serde(default)]
    pub discount_percent: Decimal,
}

impl Product {
    /// Create a product with no discount.
    pub fn new(name: impl Into<String>, base_price: Decimal) -> Result<Self, ProductError> {
        Self::with_discount(name, base_price, Decimal::ZERO)
    }

    /// Create a product with a percentage discount.
    ///
    /// The discount is intentionally unchecked: values below 0 or above 100
    /// are permissible input and flow straight into the final-price math.
    pub fn with_discount(
        name: impl Into<String>,
        base_price: Decimal,
        discount_percent: Decimal,
    ) -> Result<Self, ProductError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }

        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ProductError::NameTooLong {
                len,
                max: MAX_NAME_LEN,
            });
        }

        if base_price < Decimal::ZERO {
            return Err(ProductError::NegativePrice { price: base_price });
        }

        if base_price < MIN_PRICE {
            return Err(ProductError::PriceTooLow {
                price: base_price,
                min: MIN_PRICE,
            });
        }

        Ok(Self {
            name,
            base_price,
            discount_percent,
        })
    }

    /// Base price reduced by the discount percentage, computed exactly.
    ///
    /// Returns the base price unchanged when the discount is zero.
    pub fn final_price(&self) -> Decimal {
        self.base_price - self.base_price * self.discount_percent / dec!(100)
    }

    /// Multi-line human-readable description of the product.
    pub fn details(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Name: {}\n", self.name));
        out.push_str(&format!("Price: ${}\n", self.base_price));
        if self.discount_percent > Decimal::ZERO {
            out.push_str(&format!("Discount: {}%\n", self.discount_percent));
        }
        out.push_str(&format!("Final price: ${}", self.final_price()));
        out
    }
}

/// One-line summary; discount and final price appear only when a discount
/// is actually set.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.discount_percent > Decimal::ZERO {
            write!(
                f,
                "{} - ${} ({}% off, final ${})",
                self.name,
                self.base_price,
                self.discount_percent,
                self.final_price()
            )
        } else {
            write!(f, "{} - ${}", self.name, self.base_price)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_product_without_discount() {
        let product = Product::new("Laptop Gamer", dec!(1200.50)).unwrap();

        assert_eq!(product.name, "Laptop Gamer");
        assert_eq!(product.base_price, dec!(1200.50));
        assert_eq!(product.discount_percent, Decimal::ZERO);
        assert_eq!(product.final_price(), dec!(1200.50));
    }

    #[test]
    fn test_final_price_applies_discount_exactly() {
        let product = Product::with_discount("Mouse RGB", dec!(45.99), dec!(10)).unwrap();

        // 45.99 * 0.9, with no float rounding
        assert_eq!(product.final_price(), dec!(41.391));
    }

    #[test]
    fn test_full_discount_yields_zero_final_price() {
        let product = Product::with_discount("Giveaway", dec!(19.99), dec!(100)).unwrap();

        assert_eq!(product.final_price(), Decimal::ZERO);
    }

    #[test]
    fn test_out_of_range_discounts_are_accepted_as_is() {
        // No bound check on the discount: >100 goes negative, <0 marks up.
        let over = Product::with_discount("Clearance", dec!(10.00), dec!(150)).unwrap();
        assert_eq!(over.final_price(), dec!(-5.00));

        let under = Product::with_discount("Markup", dec!(10.00), dec!(-10)).unwrap();
        assert_eq!(under.final_price(), dec!(11.00));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = Product::new("", dec!(9.99)).unwrap_err();
        assert_eq!(err, ProductError::EmptyName);
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let err = Product::new("   ", dec!(9.99)).unwrap_err();
        assert_eq!(err, ProductError::EmptyName);
    }

    #[test]
    fn test_over_length_name_is_rejected() {
        let name = "x".repeat(MAX_NAME_LEN + 1);
        let err = Product::new(name, dec!(9.99)).unwrap_err();
        assert_eq!(
            err,
            ProductError::NameTooLong {
                len: MAX_NAME_LEN + 1,
                max: MAX_NAME_LEN,
            }
        );
    }

    #[test]
    fn test_name_at_limit_is_accepted() {
        let name = "x".repeat(MAX_NAME_LEN);
        assert!(Product::new(name, dec!(9.99)).is_ok());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = Product::new("Laptop", dec!(-1)).unwrap_err();
        assert_eq!(err, ProductError::NegativePrice { price: dec!(-1) });
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let err = Product::new("Laptop", Decimal::ZERO).unwrap_err();
        assert_eq!(
            err,
            ProductError::PriceTooLow {
                price: Decimal::ZERO,
                min: MIN_PRICE,
            }
        );
    }

    #[test]
    fn test_price_at_minimum_is_accepted() {
        assert!(Product::new("Penny sweet", MIN_PRICE).is_ok());
    }

    #[test]
    fn test_summary_omits_discount_when_zero() {
        let product = Product::new("Monitor", dec!(250.00)).unwrap();
        assert_eq!(product.to_string(), "Monitor - $250.00");
    }

    #[test]
    fn test_summary_includes_discount_when_set() {
        let product = Product::with_discount("Mouse RGB", dec!(45.99), dec!(10)).unwrap();
        assert_eq!(
            product.to_string(),
            "Mouse RGB - $45.99 (10% off, final $41.391)"
        );
    }

    #[test]
    fn test_details_lists_discount_only_when_set() {
        let plain = Product::new("Monitor", dec!(250.00)).unwrap();
        assert_eq!(
            plain.details(),
            "Name: Monitor\nPrice: $250.00\nFinal price: $250.00"
        );

        let discounted = Product::with_discount("Mouse RGB", dec!(45.99), dec!(10)).unwrap();
        assert_eq!(
            discounted.details(),
            "Name: Mouse RGB\nPrice: $45.99\nDiscount: 10%\nFinal price: $41.391"
        );
    }
}
