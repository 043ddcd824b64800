use std::io::{self, BufRead, Write};

/// Asks the operator a yes/no question. Abstracted so tests can script the
/// answers instead of blocking on real console input.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<T: Confirm + ?Sized> Confirm for &T {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}

/// Only a leading lowercase 'y' counts as yes. The check is case-sensitive,
/// matching the original tool: 'Y' declines.
pub fn is_affirmative(input: &str) -> bool {
    input.chars().next() == Some('y')
}

/// Blocking console prompt. Reads one line from stdin and applies the
/// case-sensitive affirmative check.
pub struct ConsolePrompt;

impl Confirm for ConsolePrompt {
    fn confirm(&self, prompt: &str) -> bool {
        println!("{}", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        is_affirmative(&line)
    }
}
