//! Three-way validation outcome and the notifier seam UI hosts plug into.

use crate::iban::{self, Iban, InvalidFormat};

/// What a bound text value currently holds. Empty and whitespace-only
/// input is *no input*, not a validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoInput,
    Valid(Iban),
    Invalid(InvalidFormat),
}

/// Evaluate the current text of a bound field.
pub fn evaluate(text: &str) -> Outcome {
    if text.trim().is_empty() {
        return Outcome::NoInput;
    }
    match iban::parse(text) {
        Ok(iban) => Outcome::Valid(iban),
        Err(err) => Outcome::Invalid(err),
    }
}

/// Callback a host implements to react to validity transitions. Keeps
/// the validator free of any rendering or host-runtime dependency.
pub trait ValidityNotifier {
    fn validity_changed(&mut self, outcome: &Outcome);
}

/// Notifier that reports transitions through the log facade.
pub struct LogNotifier;

impl ValidityNotifier for LogNotifier {
    fn validity_changed(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::NoInput => log::debug!("input cleared"),
            Outcome::Valid(iban) => {
                log::info!("valid {} IBAN ({} chars)", iban.country, iban.to_string().len())
            }
            Outcome::Invalid(err) => log::warn!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_are_no_input() {
        assert_eq!(evaluate(""), Outcome::NoInput);
        assert_eq!(evaluate("   \t "), Outcome::NoInput);
    }

    #[test]
    fn valid_input_carries_parsed_parts() {
        match evaluate("GB29 NWBK 6016 1331 9268 19") {
            Outcome::Valid(iban) => assert_eq!(iban.country, "GB"),
            other => panic!("expected valid outcome, got {other:?}"),
        }
    }

    #[test]
    fn invalid_input_carries_reason() {
        match evaluate("GB30 NWBK 6016 1331 9268 19") {
            Outcome::Invalid(err) => assert!(!err.reason.is_empty()),
            other => panic!("expected invalid outcome, got {other:?}"),
        }
        assert!(matches!(evaluate("not an iban"), Outcome::Invalid(_)));
    }
}
