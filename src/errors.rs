use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    #[error("Invalid personal ID code!")]
    InvalidPersonalCode,

    #[error("Invalid loan amount!")]
    InvalidLoanAmount,

    #[error("Invalid loan period!")]
    InvalidLoanPeriod,

    #[error("{reason}")]
    NoValidLoan {
        reason: NoValidLoanReason,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

/// why a well-formed request could not be approved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoValidLoanReason {
    /// applicant younger than the minimum age
    Underage {
        minimum_age_years: u32,
    },
    /// applicant would outgrow the age ceiling before the loan ends
    AgeLimitExceeded,
    /// debt segment, or no period within bounds reaches the minimum amount
    NoValidLoan,
}

impl std::fmt::Display for NoValidLoanReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoValidLoanReason::Underage { minimum_age_years } => write!(
                f,
                "The minimum age for applying for a loan is {minimum_age_years}."
            ),
            NoValidLoanReason::AgeLimitExceeded => {
                f.write_str("Unfortunately, your age exceeds the maximum set limit for this loan.")
            }
            NoValidLoanReason::NoValidLoan => f.write_str("No valid loan found!"),
        }
    }
}

impl DecisionError {
    pub fn no_valid_loan(reason: NoValidLoanReason) -> Self {
        DecisionError::NoValidLoan { reason }
    }

    /// validation failures are folded into a rejected decision instead of propagated
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DecisionError::InvalidPersonalCode
                | DecisionError::InvalidLoanAmount
                | DecisionError::InvalidLoanPeriod
        )
    }
}

pub type Result<T> = std::result::Result<T, DecisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(DecisionError::InvalidPersonalCode.to_string(), "Invalid personal ID code!");
        assert_eq!(DecisionError::InvalidLoanAmount.to_string(), "Invalid loan amount!");
        assert_eq!(DecisionError::InvalidLoanPeriod.to_string(), "Invalid loan period!");
        assert_eq!(
            DecisionError::no_valid_loan(NoValidLoanReason::Underage { minimum_age_years: 18 }).to_string(),
            "The minimum age for applying for a loan is 18."
        );
        assert_eq!(
            DecisionError::no_valid_loan(NoValidLoanReason::NoValidLoan).to_string(),
            "No valid loan found!"
        );
    }

    #[test]
    fn test_validation_split() {
        assert!(DecisionError::InvalidLoanAmount.is_validation());
        assert!(!DecisionError::no_valid_loan(NoValidLoanReason::AgeLimitExceeded).is_validation());
        assert!(!DecisionError::InvalidConfiguration { message: "x".into() }.is_validation());
    }
}
