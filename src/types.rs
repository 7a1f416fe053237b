use serde::{Deserialize, Serialize};

/// incoming loan application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i32,
}

impl LoanRequest {
    pub fn new(personal_code: impl Into<String>, loan_amount: i64, loan_period: i32) -> Self {
        Self {
            personal_code: personal_code.into(),
            loan_amount,
            loan_period,
        }
    }
}

/// outcome of a loan application
///
/// Either the three loan figures are present and `error_message` is absent,
/// or only `error_message` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    approved_amount: Option<u32>,
    approved_period: Option<u32>,
    error_message: Option<String>,
    monthly_payment: Option<u32>,
}

impl Decision {
    pub fn approved(amount: u32, period: u32, monthly_payment: u32) -> Self {
        Self {
            approved_amount: Some(amount),
            approved_period: Some(period),
            error_message: None,
            monthly_payment: Some(monthly_payment),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            approved_amount: None,
            approved_period: None,
            error_message: Some(message.into()),
            monthly_payment: None,
        }
    }

    pub fn approved_amount(&self) -> Option<u32> {
        self.approved_amount
    }

    pub fn approved_period(&self) -> Option<u32> {
        self.approved_period
    }

    pub fn monthly_payment(&self) -> Option<u32> {
        self.monthly_payment
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_approved(&self) -> bool {
        self.approved_amount.is_some()
    }
}

/// credit segment derived from the last four digits of a personal code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditSegment {
    /// 0000..=2499, applicant has debt
    NoCredit,
    /// 2500..=4999
    Segment1,
    /// 5000..=7499
    Segment2,
    /// 7500..=9999
    Segment3,
}

impl CreditSegment {
    /// map the last four digits of a personal code to a segment
    pub fn from_digits(digits: u16) -> Self {
        match digits {
            0..=2499 => CreditSegment::NoCredit,
            2500..=4999 => CreditSegment::Segment1,
            5000..=7499 => CreditSegment::Segment2,
            _ => CreditSegment::Segment3,
        }
    }

    /// multiplier turning a period into the highest approvable amount
    pub fn credit_modifier(&self) -> u32 {
        match self {
            CreditSegment::NoCredit => 0,
            CreditSegment::Segment1 => 100,
            CreditSegment::Segment2 => 300,
            CreditSegment::Segment3 => 1000,
        }
    }

    /// highest amount this segment may borrow over `period` months
    pub fn highest_valid_amount(&self, period: u32) -> u32 {
        self.credit_modifier().saturating_mul(period)
    }

    pub fn has_credit(&self) -> bool {
        *self != CreditSegment::NoCredit
    }
}
