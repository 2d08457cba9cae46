use rust_decimal::Decimal;

use crate::product::{Product, ProductError};

/// In-memory product registry.
///
/// The registry is the sole mutation point for the catalog: it owns every
/// product it is given and preserves insertion order for enumeration. The
/// application constructs exactly one `Registry` at its composition root and
/// passes it to whoever needs the catalog, so all callers observe the same
/// underlying sequence without hidden global state.
///
/// Lookups are linear scans; the catalog is expected to stay small.
pub struct Registry {
    products: Vec<Product>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product with no discount.
    ///
    /// Construction failures propagate unchanged; nothing is stored on error.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        base_price: Decimal,
    ) -> Result<&Product, ProductError> {
        let product = Product::new(name, base_price)?;
        Ok(self.push(product))
    }

    /// Add a product with a percentage discount.
    pub fn add_with_discount(
        &mut self,
        name: impl Into<String>,
        base_price: Decimal,
        discount_percent: Decimal,
    ) -> Result<&Product, ProductError> {
        let product = Product::with_discount(name, base_price, discount_percent)?;
        Ok(self.push(product))
    }

    /// Append an externally constructed product. The registry takes ownership.
    pub fn insert(&mut self, product: Product) -> &Product {
        self.push(product)
    }

    fn push(&mut self, product: Product) -> &Product {
        tracing::info!("Product added: {}", product);
        self.products.push(product);
        // Just pushed, so the last element exists.
        self.products.last().unwrap()
    }

    /// Find a product by case-insensitive exact name match.
    ///
    /// Scans in insertion order; when duplicate names exist the first one
    /// added wins. Absence is a normal outcome, not an error.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.name.eq_ignore_ascii_case(name))
    }

    /// Remove a product by case-insensitive exact name match and return it.
    ///
    /// Same match rule as [`find`](Self::find): the first match in insertion
    /// order is removed. Returns `None` when no product matches.
    pub fn remove(&mut self, name: &str) -> Option<Product> {
        let index = self
            .products
            .iter()
            .position(|product| product.name.eq_ignore_ascii_case(name))?;
        let product = self.products.remove(index);
        tracing::info!("Product removed: {}", product);
        Some(product)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Sum of the base prices of every product in the registry.
    ///
    /// Discounts are deliberately ignored here; the total reflects
    /// undiscounted catalog value, not what a buyer would pay.
    pub fn total(&self) -> Decimal {
        self.products.iter().map(|product| product.base_price).sum()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
