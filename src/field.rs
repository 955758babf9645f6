//! A text value bound to an injected notifier: re-evaluates on change
//! and reports validity transitions. Host-agnostic; any front end that
//! can call `set_value` can drive it.

use crate::notify::{evaluate, Outcome, ValidityNotifier};

pub struct IbanField<N: ValidityNotifier> {
    notifier: N,
    value: String,
    outcome: Outcome,
}

impl<N: ValidityNotifier> IbanField<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            value: String::new(),
            outcome: Outcome::NoInput,
        }
    }

    /// Update the bound text. Re-validates only when the text actually
    /// changed, and notifies only when the validity state (no input,
    /// valid, invalid) moved.
    pub fn set_value(&mut self, text: &str) -> &Outcome {
        if text == self.value {
            return &self.outcome;
        }
        self.value = text.to_string();
        let outcome = evaluate(text);
        let moved =
            std::mem::discriminant(&outcome) != std::mem::discriminant(&self.outcome);
        self.outcome = outcome;
        if moved {
            self.notifier.validity_changed(&self.outcome);
        }
        &self.outcome
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        seen: Vec<Outcome>,
    }

    impl ValidityNotifier for &mut Recorder {
        fn validity_changed(&mut self, outcome: &Outcome) {
            self.seen.push(outcome.clone());
        }
    }

    #[test]
    fn notifies_on_validity_transitions() {
        let mut recorder = Recorder { seen: Vec::new() };
        let mut field = IbanField::new(&mut recorder);

        field.set_value("GB30 NWBK 6016 1331 9268 19");
        field.set_value("GB29 NWBK 6016 1331 9268 19");
        field.set_value("");

        assert_eq!(recorder.seen.len(), 3);
        assert!(matches!(recorder.seen[0], Outcome::Invalid(_)));
        assert!(matches!(recorder.seen[1], Outcome::Valid(_)));
        assert_eq!(recorder.seen[2], Outcome::NoInput);
    }

    #[test]
    fn unchanged_text_does_not_renotify() {
        let mut recorder = Recorder { seen: Vec::new() };
        let mut field = IbanField::new(&mut recorder);

        field.set_value("DE44500105175407324931");
        field.set_value("DE44500105175407324931");

        assert_eq!(recorder.seen.len(), 1);
    }

    #[test]
    fn same_outcome_for_new_text_stays_quiet() {
        let mut recorder = Recorder { seen: Vec::new() };
        let mut field = IbanField::new(&mut recorder);

        field.set_value("bad one");
        let outcome = field.set_value("bad two").clone();

        assert!(matches!(outcome, Outcome::Invalid(_)));
        assert_eq!(recorder.seen.len(), 1);
    }

    #[test]
    fn initial_empty_value_is_no_input() {
        let mut recorder = Recorder { seen: Vec::new() };
        let mut field = IbanField::new(&mut recorder);

        assert_eq!(field.outcome(), &Outcome::NoInput);
        field.set_value("");
        assert!(recorder.seen.is_empty());
    }
}
