/// quick start - decide on a few loan applications
use chrono::{TimeZone, Utc};
use loan_decision_rs::{DecisionConfig, DecisionEngine, LoanRequest, SafeTimeProvider, TimeSource};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("loan_decision_rs=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    println!("=== loan decision quick start ===\n");

    let engine = DecisionEngine::new(DecisionConfig::default())?;
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    ));

    let requests = [
        // segment 1, minimum amount needs a longer period
        LoanRequest::new("38501054999", 4000, 12),
        // segment 3
        LoanRequest::new("38501027500", 10000, 12),
        // in debt
        LoanRequest::new("38501070000", 4000, 12),
        // bad check digit
        LoanRequest::new("38501054998", 4000, 12),
        // amount out of range
        LoanRequest::new("38501065000", 20000, 12),
    ];

    for request in &requests {
        match engine.evaluate(request, &time) {
            Ok(decision) => println!("{} -> {}", request.personal_code, serde_json::to_string(&decision)?),
            Err(e) => println!("{} -> rejected: {}", request.personal_code, e),
        }
    }

    Ok(())
}
