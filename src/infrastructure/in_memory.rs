use crate::domain::ports::LoanProductRepository;
use crate::domain::product::{LoanProduct, LoanProductPatch, NewLoanProduct};
use crate::error::{LoanError, Result};
use async_trait::async_trait;
use log::debug;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Catalog {
    products: Vec<LoanProduct>,
    /// `None` once `u32::MAX` has been handed out.
    next_id: Option<u32>,
}

/// A thread-safe in-memory loan product catalog.
///
/// Uses `Arc<RwLock<..>>` so clones share the same catalog. Ids come from a
/// counter and are never reused after a delete. An optional latency is slept
/// before every call to mimic a remote store.
#[derive(Debug, Clone)]
pub struct InMemoryLoanProductRepository {
    catalog: Arc<RwLock<Catalog>>,
    latency: Duration,
}

impl Default for InMemoryLoanProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLoanProductRepository {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Catalog {
                products: Vec::new(),
                next_id: Some(1),
            })),
            latency: Duration::ZERO,
        }
    }

    /// Creates a catalog holding the built-in product list.
    pub fn seeded() -> Self {
        let products = default_products();
        let next_id = Some(products.len() as u32 + 1);
        Self {
            catalog: Arc::new(RwLock::new(Catalog { products, next_id })),
            latency: Duration::ZERO,
        }
    }

    /// Creates a catalog from existing records, keeping their ids. New ids
    /// continue after the highest one loaded.
    pub fn from_products(products: Vec<LoanProduct>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(LoanError::Validation(format!(
                    "Duplicate loan id {}",
                    product.id
                )));
            }
        }
        let next_id = match products.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Ok(Self {
            catalog: Arc::new(RwLock::new(Catalog { products, next_id })),
            latency: Duration::ZERO,
        })
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn pause(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl LoanProductRepository for InMemoryLoanProductRepository {
    async fn all(&self) -> Result<Vec<LoanProduct>> {
        self.pause().await;
        let catalog = self.catalog.read().await;
        Ok(catalog.products.clone())
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<LoanProduct>> {
        self.pause().await;
        let catalog = self.catalog.read().await;
        Ok(catalog.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<LoanProduct>> {
        self.pause().await;
        let catalog = self.catalog.read().await;
        Ok(catalog.products.iter().find(|p| p.name == name).cloned())
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<LoanProduct>> {
        self.pause().await;
        let needle = term.to_lowercase();
        let catalog = self.catalog.read().await;
        Ok(catalog
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, product: NewLoanProduct) -> Result<LoanProduct> {
        self.pause().await;
        product.validate()?;
        let mut catalog = self.catalog.write().await;
        let id = catalog
            .next_id
            .ok_or_else(|| LoanError::Arithmetic("no loan ids left to assign".to_string()))?;
        catalog.next_id = id.checked_add(1);
        let created = LoanProduct::from_new(id, product);
        catalog.products.push(created.clone());
        debug!("stored loan product {} ('{}')", created.id, created.name);
        Ok(created)
    }

    async fn update(&self, id: u32, patch: LoanProductPatch) -> Result<Option<LoanProduct>> {
        self.pause().await;
        let mut catalog = self.catalog.write().await;
        let Some(slot) = catalog.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        let patched = patch.apply(slot)?;
        *slot = patched.clone();
        Ok(Some(patched))
    }

    async fn delete(&self, id: u32) -> Result<bool> {
        self.pause().await;
        let mut catalog = self.catalog.write().await;
        let before = catalog.products.len();
        catalog.products.retain(|p| p.id != id);
        Ok(catalog.products.len() != before)
    }
}

/// The product list the catalog ships with.
pub fn default_products() -> Vec<LoanProduct> {
    let rows = [
        ("Libranza", dec!(5000000), dec!(50000000), dec!(0.165)),
        ("Hipotecario Vivienda", dec!(20000000), dec!(500000000), dec!(0.12)),
        ("Crédito de Consumo", dec!(1000000), dec!(25000000), dec!(0.21)),
        ("Crédito Vehicular", dec!(15000000), dec!(150000000), dec!(0.15)),
        ("Crédito Educativo", dec!(2000000), dec!(60000000), dec!(0.09)),
        ("Crédito de Libre Inversión", dec!(1000000), dec!(40000000), dec!(0.24)),
        ("Microcrédito para Negocio", dec!(500000), dec!(25000000), dec!(0.30)),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((name, minimum, maximum, rate), id)| LoanProduct {
            id,
            name: name.to_string(),
            minimum_amount: minimum,
            maximum_amount: maximum,
            annual_interest_rate: rate,
        })
        .collect()
}
