//! Prompt sources: where interactive answers come from.
//!
//! The provisioning flow only sees [`PromptSource`]; the terminal is one
//! implementation ([`LinePrompt::stdio`]), canned answers are another
//! ([`ScriptedPrompt`]).

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait PromptSource {
    /// Show `question` and return one raw line of input, without the line
    /// terminator. End of input yields an empty string.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Writes the question to `writer`, reads one line from `reader`.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSource for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.writer.write_all(question.as_bytes())?;
        self.writer.flush()?;
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Pre-recorded answers, handed out in order. Once exhausted it behaves like
/// a closed stdin and returns empty answers.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl PromptSource for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// `y` in either case, surrounding whitespace ignored, counts as yes.
/// `yes` and empty input are declines.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}

/// Ask a y/n question. Read failures decline.
pub fn prompt_yes_no(source: &mut dyn PromptSource, question: &str) -> bool {
    match source.ask(question) {
        Ok(answer) => is_affirmative(&answer),
        Err(e) => {
            tracing::warn!(error = %e, question, "prompt read failed, treating as 'no'");
            false
        }
    }
}

/// Ask for free text; the answer is trimmed. Read failures yield an empty answer.
pub fn prompt_text(source: &mut dyn PromptSource, question: &str) -> String {
    match source.ask(question) {
        Ok(answer) => answer.trim().to_string(),
        Err(e) => {
            tracing::warn!(error = %e, question, "prompt read failed, using empty answer");
            String::new()
        }
    }
}
