use super::product::{LoanProduct, LoanProductPatch, NewLoanProduct};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Storage port for the loan product catalog.
///
/// The calculator only depends on `find_by_name`; the mutation half is used by
/// the catalog service.
#[async_trait]
pub trait LoanProductRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<LoanProduct>>;
    async fn find_by_id(&self, id: u32) -> Result<Option<LoanProduct>>;
    /// Exact, case-sensitive name match.
    async fn find_by_name(&self, name: &str) -> Result<Option<LoanProduct>>;
    /// Case-insensitive substring match on the name.
    async fn search_by_name(&self, term: &str) -> Result<Vec<LoanProduct>>;
    async fn create(&self, product: NewLoanProduct) -> Result<LoanProduct>;
    async fn update(&self, id: u32, patch: LoanProductPatch) -> Result<Option<LoanProduct>>;
    async fn delete(&self, id: u32) -> Result<bool>;
}

pub type LoanProductRepositoryRef = Arc<dyn LoanProductRepository>;
