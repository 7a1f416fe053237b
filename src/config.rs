use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{DecisionError, Result};
use crate::types::CreditSegment;

/// business constants the decision engine evaluates against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    pub limits: LoanLimits,
    pub interest_rates: SegmentRates,
    pub minimum_age_years: u32,
    /// oldest an applicant may be, in months, when the loan ends
    pub maximum_age_months: u32,
}

/// inclusive bounds on requested amount and period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanLimits {
    pub minimum_amount: u32,
    pub maximum_amount: u32,
    pub minimum_period: u32,
    pub maximum_period: u32,
}

/// interest rate per credit segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentRates {
    pub segment_1: Rate,
    pub segment_2: Rate,
    pub segment_3: Rate,
}

impl Default for LoanLimits {
    fn default() -> Self {
        Self {
            minimum_amount: 2_000,
            maximum_amount: 10_000,
            minimum_period: 12,
            maximum_period: 60,
        }
    }
}

impl Default for SegmentRates {
    fn default() -> Self {
        Self {
            segment_1: Rate::from_percentage(5),
            segment_2: Rate::from_percentage(4),
            segment_3: Rate::from_percentage(3),
        }
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            limits: LoanLimits::default(),
            interest_rates: SegmentRates::default(),
            minimum_age_years: 18,
            maximum_age_months: 935,
        }
    }
}

impl LoanLimits {
    pub fn amount_in_range(&self, amount: i64) -> bool {
        i64::from(self.minimum_amount) <= amount && amount <= i64::from(self.maximum_amount)
    }

    pub fn period_in_range(&self, period: i32) -> bool {
        i64::from(self.minimum_period) <= i64::from(period)
            && i64::from(period) <= i64::from(self.maximum_period)
    }
}

impl SegmentRates {
    /// rate charged to a segment, zero for applicants without credit
    pub fn for_segment(&self, segment: CreditSegment) -> Rate {
        match segment {
            CreditSegment::NoCredit => Rate::ZERO,
            CreditSegment::Segment1 => self.segment_1,
            CreditSegment::Segment2 => self.segment_2,
            CreditSegment::Segment3 => self.segment_3,
        }
    }
}

impl DecisionConfig {
    /// parse configuration from json, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DecisionConfig =
            serde_json::from_str(json).map_err(|e| DecisionError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let limits = &self.limits;
        if limits.minimum_amount > limits.maximum_amount {
            return Err(invalid(format!(
                "minimum amount {} exceeds maximum amount {}",
                limits.minimum_amount, limits.maximum_amount
            )));
        }
        if limits.minimum_period == 0 {
            return Err(invalid("minimum period must be at least one month".to_string()));
        }
        if limits.minimum_period > limits.maximum_period {
            return Err(invalid(format!(
                "minimum period {} exceeds maximum period {}",
                limits.minimum_period, limits.maximum_period
            )));
        }
        let rates = &self.interest_rates;
        for (name, rate) in [
            ("segment_1", rates.segment_1),
            ("segment_2", rates.segment_2),
            ("segment_3", rates.segment_3),
        ] {
            if rate.is_negative() {
                return Err(invalid(format!("negative interest rate {rate} for {name}")));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> DecisionError {
    DecisionError::InvalidConfiguration { message }
}
