use crate::domain::amortization;
use crate::domain::calculation::{CalculationRequest, CalculationResult};
use crate::domain::ports::LoanProductRepositoryRef;
use crate::error::{LoanError, Result};
use chrono::{Local, NaiveDate};
use log::{info, warn};

/// Resolves a loan product by name and runs the amortization engine on it.
#[derive(Clone)]
pub struct LoanCalculatorService {
    repository: LoanProductRepositoryRef,
}

impl LoanCalculatorService {
    pub fn new(repository: LoanProductRepositoryRef) -> Self {
        Self { repository }
    }

    /// Calculates starting from today's local date.
    pub async fn calculate(
        &self,
        loan_name: &str,
        request: &CalculationRequest,
    ) -> Result<CalculationResult> {
        self.calculate_as_of(loan_name, request, Local::now().date_naive())
            .await
    }

    pub async fn calculate_as_of(
        &self,
        loan_name: &str,
        request: &CalculationRequest,
        start: NaiveDate,
    ) -> Result<CalculationResult> {
        let product = self
            .repository
            .find_by_name(loan_name)
            .await?
            .ok_or_else(|| LoanError::ProductNotFound {
                name: loan_name.to_string(),
            })?;

        // The product is a snapshot; later catalog edits do not affect this run.
        match amortization::calculate_as_of(&product, request, start) {
            Ok(result) => {
                info!(
                    "calculated {} payments for '{}'",
                    result.schedule.len(),
                    product.name
                );
                Ok(result)
            }
            Err(e) => {
                warn!("rejected calculation for '{}': {}", product.name, e);
                Err(e)
            }
        }
    }
}
