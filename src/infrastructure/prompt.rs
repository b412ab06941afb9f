// src/infrastructure/prompt.rs
use crate::application::Confirm;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Interactive `[y/N]` confirmation on the terminal.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        if write!(stderr, "{prompt} [y/N] ").and_then(|()| stderr.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        if let Err(err) = io::stdin().lock().read_line(&mut answer) {
            warn!(error = %err, "Could not read confirmation");
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("y\n", true)]
    #[case("YES", true)]
    #[case(" yes ", true)]
    #[case("\n", false)]
    #[case("n", false)]
    #[case("nope", false)]
    fn given_answer_when_checking_then_only_yes_confirms(#[case] answer: &str, #[case] expected: bool) {
        assert_eq!(is_yes(answer), expected);
    }
}
