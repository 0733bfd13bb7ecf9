// src/services/calculator.rs
use crate::models::{
    CalculationResult, Certificate, PayoutCadence, ReturnType, YearBreakdown, YearlyBreakdown,
};

/// Number of payouts over the certificate term for the given cadence.
fn payout_periods(cadence: PayoutCadence, duration_months: u32) -> f64 {
    let months = duration_months as f64;
    match cadence {
        PayoutCadence::Monthly => months,
        PayoutCadence::Quarterly => months / 3.0,
        PayoutCadence::Annual => months / 12.0,
    }
}

/// Compute expected profit for a certificate and deposited principal.
///
/// Pure and stateless; performs no validation. Callers must ensure
/// `principal > 0` and `certificate.duration > 0` before invoking.
pub fn calculate_profit(certificate: &Certificate, principal: f64) -> CalculationResult {
    let years = certificate.duration as f64 / 12.0;

    let (total_profit, yearly_breakdown) =
        match (certificate.return_type, certificate.graduated_rates) {
            (ReturnType::Graduated, Some(rates)) => {
                // Each yearly bucket accrues its own rate, prorated by how
                // much of that year the term covers. Terms past 36 months
                // have no fourth bucket and stop accruing.
                let year1_profit = principal * (rates.year1 / 100.0) * years.min(1.0);
                let year2_profit = principal * (rates.year2 / 100.0) * (years - 1.0).clamp(0.0, 1.0);
                let year3_profit = principal * (rates.year3 / 100.0) * (years - 2.0).clamp(0.0, 1.0);
                let total = year1_profit + year2_profit + year3_profit;

                let breakdown = YearlyBreakdown {
                    year1: YearBreakdown {
                        periodic_profit: year1_profit / 12.0,
                        yearly_profit: year1_profit,
                    },
                    year2: YearBreakdown {
                        periodic_profit: year2_profit / 12.0,
                        yearly_profit: year2_profit,
                    },
                    year3: YearBreakdown {
                        periodic_profit: year3_profit / 12.0,
                        yearly_profit: year3_profit,
                    },
                };
                (total, Some(breakdown))
            }
            // Fixed and variable certificates carry one flat annual rate
            // for the whole term. A graduated certificate missing its
            // rate schedule degrades to the flat formula as well.
            _ => {
                let total = principal * (certificate.interest_rate / 100.0) * years;
                (total, None)
            }
        };

    let periodic_profit = total_profit / payout_periods(certificate.payout, certificate.duration);

    CalculationResult {
        total_profit,
        periodic_profit,
        total_amount: principal + total_profit,
        yearly_breakdown,
    }
}
