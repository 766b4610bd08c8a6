// Standard library
use std::fmt;

// Project imports
use crate::checker::types::CheckOutcome;
use crate::endpoints::types::RpcFamily;

// Current module imports
use super::types::FailureReport;

impl FailureReport {
    /// Appends the outcome's URL to its family list when it failed.
    pub fn record(&mut self, outcome: &CheckOutcome) {
        if !outcome.result.is_failing() {
            return;
        }

        let failures = match outcome.family {
            RpcFamily::Evm => &mut self.evm,
            RpcFamily::Cosmos => &mut self.cosmos,
        };
        failures.push(outcome.url.clone());
    }

    pub fn failures(&self, family: RpcFamily) -> &[String] {
        match family {
            RpcFamily::Evm => &self.evm,
            RpcFamily::Cosmos => &self.cosmos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.evm.is_empty() && self.cosmos.is_empty()
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Summary of Failing RPCs ---")?;
        for family in [RpcFamily::Evm, RpcFamily::Cosmos] {
            let failures = self.failures(family);
            if failures.is_empty() {
                writeln!(f, "No failing {} RPCs.", family)?;
            } else {
                writeln!(f, "Failing {} RPCs:", family)?;
                for url in failures {
                    writeln!(f, "{}", url)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::types::CheckResult;

    fn outcome(url: &str, family: RpcFamily, result: CheckResult) -> CheckOutcome {
        CheckOutcome {
            url: url.to_string(),
            family,
            result,
        }
    }

    #[test]
    fn records_only_failures_under_their_family() {
        let mut report = FailureReport::default();
        let failing = || CheckResult::Failing {
            reason: "boom".to_string(),
        };

        report.record(&outcome("http://a", RpcFamily::Evm, failing()));
        report.record(&outcome(
            "http://b",
            RpcFamily::Evm,
            CheckResult::Healthy {
                latest_block: Some(1),
            },
        ));
        report.record(&outcome("http://c", RpcFamily::Cosmos, failing()));
        report.record(&outcome("http://d", RpcFamily::Evm, failing()));

        assert_eq!(report.evm, vec!["http://a", "http://d"]);
        assert_eq!(report.cosmos, vec!["http://c"]);
        assert!(!report.is_empty());
    }

    #[test]
    fn summary_without_failures() {
        let report = FailureReport::default();

        assert_eq!(
            report.to_string(),
            "--- Summary of Failing RPCs ---\n\
             No failing EVM RPCs.\n\
             No failing Cosmos RPCs.\n"
        );
    }

    #[test]
    fn summary_lists_failing_urls_one_per_line() {
        let report = FailureReport {
            evm: vec!["http://a".to_string(), "http://c".to_string()],
            cosmos: vec![],
        };

        assert_eq!(
            report.to_string(),
            "--- Summary of Failing RPCs ---\n\
             Failing EVM RPCs:\n\
             http://a\n\
             http://c\n\
             No failing Cosmos RPCs.\n"
        );
    }

    #[test]
    fn serializes_per_family_lists() {
        let report = FailureReport {
            evm: vec![],
            cosmos: vec!["http://b".to_string()],
        };

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"evm": [], "cosmos": ["http://b"]})
        );
    }
}
