use crate::domain::ports::LoanProductRepositoryRef;
use crate::domain::product::{LoanProduct, LoanProductPatch, NewLoanProduct};
use crate::error::{LoanError, Result};
use log::info;

/// Create, read, update, delete and search over the loan product catalog.
///
/// Lookups that find nothing become typed errors here, so callers can surface
/// the message directly.
#[derive(Clone)]
pub struct LoanCatalogService {
    repository: LoanProductRepositoryRef,
}

impl LoanCatalogService {
    pub fn new(repository: LoanProductRepositoryRef) -> Self {
        Self { repository }
    }

    /// Lists every product, or only those whose name contains `name_filter`.
    pub async fn list(&self, name_filter: Option<&str>) -> Result<Vec<LoanProduct>> {
        match name_filter {
            Some(name) => self.search(name).await,
            None => self.repository.all().await,
        }
    }

    pub async fn get(&self, id: u32) -> Result<LoanProduct> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(LoanError::LoanNotFound { id })
    }

    /// Adds a product and returns the whole catalog afterwards.
    pub async fn create(&self, product: NewLoanProduct) -> Result<Vec<LoanProduct>> {
        let created = self.repository.create(product).await?;
        info!("created loan product {} ('{}')", created.id, created.name);
        self.repository.all().await
    }

    /// Applies `patch` to product `id`. A patch that changes nothing is rejected.
    pub async fn update(&self, id: u32, patch: LoanProductPatch) -> Result<LoanProduct> {
        if patch.is_empty() {
            return Err(LoanError::Validation(
                "Update needs at least one field to change".to_string(),
            ));
        }
        let updated = self
            .repository
            .update(id, patch)
            .await?
            .ok_or(LoanError::LoanNotFound { id })?;
        info!("updated loan product {} ('{}')", updated.id, updated.name);
        Ok(updated)
    }

    pub async fn delete(&self, id: u32) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(LoanError::LoanNotFound { id });
        }
        info!("deleted loan product {}", id);
        Ok(())
    }

    /// Case-insensitive substring search. An empty result is an error.
    pub async fn search(&self, term: &str) -> Result<Vec<LoanProduct>> {
        let found = self.repository.search_by_name(term).await?;
        if found.is_empty() {
            return Err(LoanError::NoMatch {
                query: term.to_string(),
            });
        }
        Ok(found)
    }
}
