//! Calculation logic for the Amortization Engine.
//!
//! This module contains the pure amortization maths: annual-to-monthly rate
//! conversion, tenure to installment count, the equal monthly installment,
//! the yearly schedule simulation, and currency rounding. [`compute_loan`]
//! chains them into a single call.

mod engine;
mod installment;
mod monthly_rate;
mod rounding;
mod schedule;
mod tenure;

pub use engine::compute_loan;
pub use installment::{InstallmentResult, calculate_installment};
pub use monthly_rate::{MONTHS_PER_YEAR, MonthlyRateResult, convert_monthly_rate};
pub use rounding::round_currency;
pub use schedule::{ScheduleResult, build_yearly_schedule};
pub use tenure::{TenureResult, convert_tenure};
