//! # Sample Data
//!
//! The small catalogue the demo orders from.
//!
//! | Id | Product    | Price | Category   |
//! |----|------------|-------|------------|
//! | 1  | Notebook   | 3000  | Eletronico |
//! | 2  | Teclado    | 200   | Periferico |
//! | 3  | HD Externo | 500   | Eletronico |

use std::sync::Arc;

use loja_core::{CoreError, CoreResult, Customer, Money, OrderLine, Product};

/// Products, in id order.
const PRODUCTS: &[(u32, &str, i64, &str)] = &[
    (1, "Notebook", 3000, "Eletronico"),
    (2, "Teclado", 200, "Periferico"),
    (3, "HD Externo", 500, "Eletronico"),
];

/// (product id, quantity) for the sample order.
const SAMPLE_ORDER: &[(u32, u32)] = &[(1, 1), (3, 3)];

#[derive(Debug)]
pub struct Seed {
    pub products: Vec<Arc<Product>>,
    pub customer: Arc<Customer>,
}

impl Seed {
    pub fn load() -> CoreResult<Self> {
        let products = PRODUCTS
            .iter()
            .map(|&(id, name, price, category)| {
                Product::new(id, name, Money::from_major(price), category).map(Arc::new)
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let customer = Arc::new(Customer::new(1, "Maria", "maria@gmail.com", "12344321")?);

        Ok(Seed { products, customer })
    }

    pub fn product(&self, id: u32) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Lines of the sample order: one Notebook and three HD Externo.
    pub fn sample_lines(&self) -> CoreResult<Vec<OrderLine>> {
        self.lines_for(SAMPLE_ORDER)
    }

    /// Builds lines from `(product id, quantity)` pairs.
    ///
    /// ## Errors
    /// `ProductNotFound` when an id is not in the catalogue.
    pub fn lines_for(&self, items: &[(u32, u32)]) -> CoreResult<Vec<OrderLine>> {
        items
            .iter()
            .map(|&(id, qty)| {
                let product = self.product(id).ok_or(CoreError::ProductNotFound(id))?;
                OrderLine::new(Arc::clone(product), qty)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalogue() {
        let seed = Seed::load().unwrap();
        assert_eq!(seed.products.len(), 3);
        assert_eq!(seed.product(2).unwrap().name(), "Teclado");
        assert_eq!(seed.customer.name(), "Maria");
    }

    #[test]
    fn test_sample_lines() {
        let seed = Seed::load().unwrap();
        let lines = seed.sample_lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product().name(), "Notebook");
        assert_eq!(lines[1].quantity(), 3);
    }

    #[test]
    fn test_unknown_product_is_an_error() {
        let seed = Seed::load().unwrap();
        let err = seed.lines_for(&[(1, 1), (42, 2)]).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(42)));
    }
}
