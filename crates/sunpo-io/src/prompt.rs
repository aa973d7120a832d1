use std::io::{BufRead, Write};

use anyhow::Result;
use indexmap::IndexMap;

/// Terms learned during one invocation, in prompt order. Handed to the
/// dictionary store for merging and to the persistence layer afterwards.
#[derive(Debug, Default)]
pub struct LearningSession {
    entries: IndexMap<String, String>,
}

impl LearningSession {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(term, translation)| (term.as_str(), translation.as_str()))
    }
}

/// Prompt for a translation of each unknown term.
///
/// Empty input, `skip`, or `s` skips a term; end of input ends the session
/// early. Reads from `input` and writes to `output` so the CLI can hand in
/// locked stdio and tests can script the exchange.
pub fn run_session<R, W>(terms: &[String], mut input: R, mut output: W) -> Result<LearningSession>
where
    R: BufRead,
    W: Write,
{
    let mut session = LearningSession::default();
    if terms.is_empty() {
        return Ok(session);
    }

    writeln!(output, "Found {} unknown Japanese terms:", terms.len())?;
    for term in terms {
        writeln!(output, "  - {term}")?;
    }
    writeln!(output)?;
    writeln!(output, "Enter a translation for each term (Enter skips):")?;

    for term in terms {
        write!(output, "'{term}' -> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let answer = line.trim();
        if answer.is_empty()
            || answer.eq_ignore_ascii_case("skip")
            || answer.eq_ignore_ascii_case("s")
        {
            writeln!(output, "  skipped '{term}'")?;
            continue;
        }
        session.entries.insert(term.clone(), answer.to_string());
        writeln!(output, "  learned '{term}' -> '{answer}'")?;
    }

    Ok(session)
}

/// True when stdin is a terminal and prompting is possible.
pub fn stdin_is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}
