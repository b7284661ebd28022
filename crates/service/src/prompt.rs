//! Operator confirmation for overwriting existing posts.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Source of yes/no answers.
pub trait OverwritePrompt {
    /// Ask `question`; `true` means overwrite.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Line-oriented `[yN]` prompt.
///
/// Answers starting with `y` accept, answers starting with `n` or an empty
/// line decline, anything else asks again. End of input declines.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin/stdout.
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> OverwritePrompt for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            write!(self.output, "{question} [yN] ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            let answer = line.trim();
            if answer.starts_with(['y', 'Y']) {
                return Ok(true);
            }
            if answer.is_empty() || answer.starts_with(['n', 'N']) {
                return Ok(false);
            }
        }
    }
}
