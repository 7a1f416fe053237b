pub mod applicant;
pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod payment;
pub mod personal_code;
pub mod types;

// re-export key types
pub use config::{DecisionConfig, LoanLimits, SegmentRates};
pub use decimal::Rate;
pub use engine::DecisionEngine;
pub use errors::{DecisionError, NoValidLoanReason, Result};
pub use personal_code::{EstonianPersonalCodeValidator, PersonalCodeValidator};
pub use types::{CreditSegment, Decision, LoanRequest};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
