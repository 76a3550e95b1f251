//! Level-payment amortization.
//!
//! Pure and synchronous: every call reads an immutable product snapshot and
//! builds its own schedule, so concurrent calls need no coordination.

use super::calculation::{AmortizationEntry, CalculationRequest, CalculationResult, CalculationSummary};
use super::calendar::add_months;
use super::money::{AnnualRate, Money, Principal};
use super::product::LoanProduct;
use crate::error::{LoanError, Result};
use chrono::{Local, NaiveDate};
use log::{debug, trace};
use rust_decimal::Decimal;

/// Calculates the schedule with today's local date as the loan start.
pub fn calculate(product: &LoanProduct, request: &CalculationRequest) -> Result<CalculationResult> {
    calculate_as_of(product, request, Local::now().date_naive())
}

/// Calculates the summary and month-by-month schedule for `request`.
///
/// Payment `n` falls due `n` months after `start`. Nothing is returned
/// unless every validation passes.
pub fn calculate_as_of(
    product: &LoanProduct,
    request: &CalculationRequest,
    start: NaiveDate,
) -> Result<CalculationResult> {
    if !product.allows(request.principal) {
        return Err(LoanError::OutOfRange {
            requested: request.principal,
            minimum: product.minimum_amount,
            maximum: product.maximum_amount,
        });
    }
    let principal = Principal::new(request.principal)?;
    if request.term_years == 0 {
        return Err(LoanError::InvalidTerm {
            years: request.term_years,
        });
    }
    let num_payments = request
        .term_years
        .checked_mul(12)
        .ok_or_else(|| LoanError::Arithmetic(format!("term of {} years", request.term_years)))?;
    let rate = AnnualRate::new(
        request
            .annual_rate_override
            .unwrap_or(product.annual_interest_rate),
    )?;
    let monthly_rate = rate.monthly();
    let final_payment_date = add_months(start, num_payments)?;

    let monthly_payment = level_payment(principal.value(), monthly_rate, num_payments)?;
    let total_payment = monthly_payment
        .checked_mul(Decimal::from(num_payments))
        .ok_or_else(|| LoanError::Arithmetic("total payment".to_string()))?;
    debug!(
        "product '{}': principal {}, rate {}, {} payments of {}",
        product.name,
        principal.value(),
        rate.value(),
        num_payments,
        monthly_payment
    );

    let schedule = build_schedule(principal, monthly_rate, monthly_payment, num_payments, start)?;

    let summary = CalculationSummary {
        principal: principal.into(),
        total_payment: Money::new(total_payment),
        total_interest: Money::new(total_payment - principal.value()),
        monthly_payment: Money::new(monthly_payment),
        annual_interest_rate: rate.value(),
        num_payments,
        final_payment_date,
    };

    Ok(CalculationResult { summary, schedule })
}

/// Fixed monthly payment that retires `principal` in `num_payments` months.
pub fn level_payment(principal: Decimal, monthly_rate: Decimal, num_payments: u32) -> Result<Decimal> {
    if num_payments == 0 {
        return Err(LoanError::InvalidTerm { years: 0 });
    }
    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(num_payments));
    }

    // P * r(1+r)^n / ((1+r)^n - 1)
    let factor = compound(monthly_rate, num_payments)?;
    principal
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(factor - Decimal::ONE))
        .ok_or_else(|| {
            LoanError::Arithmetic(format!(
                "level payment for {principal} at {monthly_rate} over {num_payments} months"
            ))
        })
}

/// (1 + r)^n by repeated multiplication.
fn compound(rate: Decimal, n: u32) -> Result<Decimal> {
    let factor = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| LoanError::Arithmetic(format!("(1 + {rate})^{n}")))?;
    }
    Ok(result)
}

fn build_schedule(
    principal: Principal,
    monthly_rate: Decimal,
    monthly_payment: Decimal,
    num_payments: u32,
    start: NaiveDate,
) -> Result<Vec<AmortizationEntry>> {
    let payment = Money::new(monthly_payment);
    let mut balance: Money = principal.into();
    let mut schedule = Vec::with_capacity(num_payments as usize);

    for month in 1..=num_payments {
        let interest = Money::new(balance.value() * monthly_rate);
        let mut principal_paid = payment - interest;
        balance -= principal_paid;

        // The last row absorbs whatever drift is left so the loan closes at zero.
        if month == num_payments && balance != Money::ZERO {
            trace!("month {}: folding residual {} into principal", month, balance.value());
            principal_paid += balance;
            balance = Money::ZERO;
        }

        trace!(
            "month {}: interest {}, principal {}, balance {}",
            month,
            interest.value(),
            principal_paid.value(),
            balance.value()
        );

        schedule.push(AmortizationEntry {
            month,
            due_date: add_months(start, month)?,
            monthly_payment: payment,
            principal_paid,
            interest_paid: interest,
            remaining_balance: balance.non_negative(),
        });
    }

    Ok(schedule)
}
