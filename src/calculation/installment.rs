//! Equal monthly installment (EMI) calculation.
//!
//! Uses the standard annuity formula for a diminishing-balance loan:
//!
//! ```text
//! EMI = P x r x (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! where `P` is the principal, `r` the monthly rate and `n` the number of
//! monthly installments. The formula is undefined at `r = 0`.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the installment calculation, at full precision.
#[derive(Debug, Clone)]
pub struct InstallmentResult {
    /// The equal monthly installment, unrounded.
    pub monthly_payment: Decimal,
    /// `monthly_payment * months`, unrounded.
    pub total_payment: Decimal,
    /// `total_payment - principal`, unrounded.
    pub total_interest: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the fixed monthly installment that amortizes `principal` over `months`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the compounding factor does not
/// exceed one (a zero rate), or if the figures overflow decimal precision.
///
/// # Examples
///
/// ```
/// use amortization_engine::calculation::calculate_installment;
/// use rust_decimal_macros::dec;
///
/// // 100,000 at 1% per month over 12 months
/// let result = calculate_installment(dec!(100000), dec!(0.01), 12, 3).unwrap();
/// assert_eq!(result.monthly_payment.round_dp(2), dec!(8884.88));
/// ```
pub fn calculate_installment(
    principal: Decimal,
    monthly_rate: Decimal,
    months: u32,
    step_number: u32,
) -> EngineResult<InstallmentResult> {
    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(months))
        .ok_or_else(|| overflow("tenure_years", "compounding factor overflows"))?;

    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Err(EngineError::InvalidInput {
            field: "annual_rate_percent".to_string(),
            message: "rate is too small to amortize the loan".to_string(),
        });
    }

    let monthly_payment = principal
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(growth))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| overflow("principal", "installment overflows"))?;

    let total_payment = monthly_payment
        .checked_mul(Decimal::from(months))
        .ok_or_else(|| overflow("principal", "total payment overflows"))?;
    let total_interest = total_payment - principal;

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_payment".to_string(),
        rule_name: "Equal Monthly Installment".to_string(),
        input: serde_json::json!({
            "principal": principal.normalize().to_string(),
            "monthly_rate": monthly_rate.normalize().to_string(),
            "months": months
        }),
        output: serde_json::json!({
            "monthly_payment": monthly_payment.round_dp(6).normalize().to_string(),
            "total_payment": total_payment.round_dp(6).normalize().to_string(),
            "total_interest": total_interest.round_dp(6).normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} x (1 + r)^{} / ((1 + r)^{} - 1) = {} per month",
            principal.normalize(),
            monthly_rate.round_dp(10).normalize(),
            months,
            months,
            monthly_payment.round_dp(2)
        ),
    };

    Ok(InstallmentResult {
        monthly_payment,
        total_payment,
        total_interest,
        audit_step,
    })
}

pub(super) fn overflow(field: &str, message: &str) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.to_string(),
    }
}
