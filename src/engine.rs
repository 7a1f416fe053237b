use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use tracing::{debug, info};

use crate::applicant;
use crate::config::DecisionConfig;
use crate::errors::{DecisionError, NoValidLoanReason, Result};
use crate::payment;
use crate::personal_code::{self, EstonianPersonalCodeValidator, PersonalCodeValidator};
use crate::types::{CreditSegment, Decision, LoanRequest};

/// computes the largest loan an applicant qualifies for
///
/// The engine holds only read-only configuration and a validator, so one
/// instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct DecisionEngine<V = EstonianPersonalCodeValidator> {
    config: DecisionConfig,
    validator: V,
}

/// request that passed input validation
#[derive(Debug, Clone, Copy)]
struct VerifiedRequest {
    birth_date: NaiveDate,
    segment: CreditSegment,
    amount: u32,
    period: u32,
}

impl DecisionEngine {
    /// engine validating Estonian personal codes
    pub fn new(config: DecisionConfig) -> Result<Self> {
        Self::with_validator(config, EstonianPersonalCodeValidator)
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self {
            config: DecisionConfig::default(),
            validator: EstonianPersonalCodeValidator,
        }
    }
}

impl<V: PersonalCodeValidator> DecisionEngine<V> {
    pub fn with_validator(config: DecisionConfig, validator: V) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, validator })
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// decide on a loan request
    pub fn evaluate(&self, request: &LoanRequest, time_provider: &SafeTimeProvider) -> Result<Decision> {
        self.calculate_approved_loan(
            &request.personal_code,
            request.loan_amount,
            request.loan_period,
            time_provider,
        )
    }

    /// Calculates the approved loan amount and period for an applicant.
    ///
    /// Malformed input comes back as `Ok` with a rejected [`Decision`] carrying
    /// only the error message. Business rule rejections (age limits, debt, no
    /// reachable amount) are returned as [`DecisionError::NoValidLoan`].
    ///
    /// When the requested amount is within the approved amount the monthly
    /// payment is computed for the requested amount, otherwise it is zero.
    pub fn calculate_approved_loan(
        &self,
        personal_code: &str,
        loan_amount: i64,
        loan_period: i32,
        time_provider: &SafeTimeProvider,
    ) -> Result<Decision> {
        let request = match self.verify_inputs(personal_code, loan_amount, loan_period) {
            Ok(request) => request,
            Err(e) if e.is_validation() => {
                debug!(error = %e, "loan request failed validation");
                return Ok(Decision::rejected(e.to_string()));
            }
            Err(e) => return Err(e),
        };

        let today = time_provider.now().date_naive();
        self.check_age(&request, today)?;

        let segment = request.segment;
        if !segment.has_credit() {
            info!("applicant in debt segment, no loan offered");
            return Err(DecisionError::no_valid_loan(NoValidLoanReason::NoValidLoan));
        }

        let period = self.find_approvable_period(segment, request.period)?;
        let limits = &self.config.limits;
        let approved_amount = limits.maximum_amount.min(segment.highest_valid_amount(period));

        let monthly_payment = if request.amount <= approved_amount {
            let rate = self.config.interest_rates.for_segment(segment);
            payment::monthly_payment(request.amount, period, rate)
        } else {
            0
        };

        info!(
            ?segment,
            approved_amount,
            approved_period = period,
            monthly_payment,
            "loan approved"
        );
        Ok(Decision::approved(approved_amount, period, monthly_payment))
    }

    fn verify_inputs(&self, code: &str, loan_amount: i64, loan_period: i32) -> Result<VerifiedRequest> {
        if !self.validator.is_valid(code) {
            return Err(DecisionError::InvalidPersonalCode);
        }
        let limits = &self.config.limits;
        if !limits.amount_in_range(loan_amount) {
            return Err(DecisionError::InvalidLoanAmount);
        }
        if !limits.period_in_range(loan_period) {
            return Err(DecisionError::InvalidLoanPeriod);
        }

        let birth_date = personal_code::birth_date(code)?;
        let segment = CreditSegment::from_digits(personal_code::segment_digits(code)?);

        // range checks above bound both values to the configured u32 limits
        Ok(VerifiedRequest {
            birth_date,
            segment,
            amount: loan_amount as u32,
            period: loan_period as u32,
        })
    }

    fn check_age(&self, request: &VerifiedRequest, today: NaiveDate) -> Result<()> {
        if !applicant::is_adult(request.birth_date, today, self.config.minimum_age_years) {
            info!(
                age_years = applicant::age_in_years(request.birth_date, today),
                minimum_age_years = self.config.minimum_age_years,
                "applicant below minimum age"
            );
            return Err(DecisionError::no_valid_loan(NoValidLoanReason::Underage {
                minimum_age_years: self.config.minimum_age_years,
            }));
        }

        let age_months = applicant::age_in_months(request.birth_date, today);
        if age_months.saturating_add(request.period) > self.config.maximum_age_months {
            info!(
                age_months,
                period = request.period,
                maximum_age_months = self.config.maximum_age_months,
                "applicant exceeds age limit by end of loan"
            );
            return Err(DecisionError::no_valid_loan(NoValidLoanReason::AgeLimitExceeded));
        }
        Ok(())
    }

    /// shortest period from `requested` whose highest amount reaches the minimum loan
    fn find_approvable_period(&self, segment: CreditSegment, requested: u32) -> Result<u32> {
        let limits = &self.config.limits;
        let mut period = requested;
        while period <= limits.maximum_period
            && segment.highest_valid_amount(period) < limits.minimum_amount
        {
            period += 1;
        }

        if period > limits.maximum_period {
            debug!(?segment, requested, "minimum amount not reachable within maximum period");
            return Err(DecisionError::no_valid_loan(NoValidLoanReason::NoValidLoan));
        }
        if period != requested {
            debug!(?segment, requested, period, "extended period to reach minimum amount");
        }
        Ok(period)
    }
}
