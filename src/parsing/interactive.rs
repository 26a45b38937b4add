//! Interactive, line-by-line entry of fragments.
//!
//! The collector asks for one field at a time and validates each fragment the
//! same way [`parse_fragments`](crate::parsing::fragments::parse_fragments)
//! does. A bad field prints an error and restarts the current fragment;
//! fragments already entered are kept.
//!
//! Lines come from a [`LineSource`]: an [`EditorSource`] for terminals (Ctrl-D
//! finishes, Ctrl-C aborts) or a [`ReaderSource`] for piped input.

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::{Behavior, Config, DefaultEditor};
use thiserror::Error;
use tracing::debug;

use crate::core::fragment::{default_fragment_name, Fragment};
use crate::parsing::concentration::parse_concentration;
use crate::parsing::fragments::{build_fragment, parse_length, ParseError};
use crate::utils::validation::{check_fragment_limit, MIN_FRAGMENTS};

pub const INSTRUCTIONS: &str = "\
Please provide names and concentrations for each fragment in the assembly,
beginning with the backbone.  Concentrations are assumed to be in ng/µL, unless
a unit is specified.  If necessary, you will be asked for the length of the
insert.  Press Ctrl-D to finish, or Ctrl-C to abort.
";

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("aborted by user")]
    Aborted,

    #[error("input ended after {collected} fragment(s); at least {MIN_FRAGMENTS} are required")]
    InputExhausted { collected: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line editor error: {0}")]
    Editor(#[from] ReadlineError),
}

/// One response from a line source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line of text, without its terminator
    Text(String),
    /// The user signalled they are done (Ctrl-D, or end of a stream)
    EndOfInput,
    /// The user asked to abandon everything (Ctrl-C)
    Abort,
}

/// Where the collector reads its answers from
pub trait LineSource {
    /// Show `prompt` and read one response.
    ///
    /// # Errors
    ///
    /// Returns `CollectError::Io` or `CollectError::Editor` if reading fails.
    fn read_line(&mut self, prompt: &str) -> Result<Line, CollectError>;

    /// True once the source can never produce another line.
    ///
    /// A terminal can keep going after Ctrl-D, a pipe cannot.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Terminal input through rustyline.
///
/// Prompts are drawn on the controlling terminal, not stdout, so results can
/// still be redirected to a file.
pub struct EditorSource {
    editor: DefaultEditor,
}

/// Editor settings for [`EditorSource`]
#[must_use]
pub fn editor_config() -> Config {
    Config::builder().behavior(Behavior::PreferTerm).build()
}

impl EditorSource {
    /// # Errors
    ///
    /// Returns `CollectError::Editor` if the terminal cannot be set up.
    pub fn new() -> Result<Self, CollectError> {
        Ok(Self {
            editor: DefaultEditor::with_config(editor_config())?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Line, CollectError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Line::Text(line)),
            Err(ReadlineError::Eof) => Ok(Line::EndOfInput),
            Err(ReadlineError::Interrupted) => Ok(Line::Abort),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain buffered input, e.g. a pipe. Prompts are echoed to `prompts`.
pub struct ReaderSource<R, W> {
    reader: R,
    prompts: W,
    exhausted: bool,
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    pub fn new(reader: R, prompts: W) -> Self {
        Self {
            reader,
            prompts,
            exhausted: false,
        }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Line, CollectError> {
        write!(self.prompts, "{prompt}")?;
        self.prompts.flush()?;

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            self.exhausted = true;
            return Ok(Line::EndOfInput);
        }

        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Line::Text(line.to_string()))
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Why a single fragment could not be completed
enum FieldOutcome {
    Invalid(ParseError),
    EndOfInput,
    Abort,
}

impl From<ParseError> for FieldOutcome {
    fn from(e: ParseError) -> Self {
        Self::Invalid(e)
    }
}

/// Collects fragments for a single interactive session
pub struct FragmentCollector<'a, S, W> {
    source: &'a mut S,
    messages: W,
    fragments: Vec<Fragment>,
}

impl<'a, S: LineSource, W: Write> FragmentCollector<'a, S, W> {
    /// `messages` receives headings, blank lines and error reports
    pub fn new(source: &'a mut S, messages: W) -> Self {
        Self {
            source,
            messages,
            fragments: Vec::new(),
        }
    }

    /// Prompt until the user finishes with at least two fragments.
    ///
    /// # Errors
    ///
    /// Returns `CollectError::Aborted` on Ctrl-C, `CollectError::InputExhausted`
    /// if a non-interactive source runs dry with too few fragments, or an IO or
    /// editor error.
    pub fn collect(mut self) -> Result<Vec<Fragment>, CollectError> {
        writeln!(self.messages, "{INSTRUCTIONS}")?;

        loop {
            if let Some(e) = check_fragment_limit(self.fragments.len()) {
                writeln!(self.messages, "Error: {e}")?;
                return Ok(self.fragments);
            }

            match self.next_fragment()? {
                Ok(fragment) => {
                    debug!("Collected fragment '{}' at {} nM", fragment.name, fragment.conc_nm());
                    self.fragments.push(fragment);
                    writeln!(self.messages)?;
                }
                Err(FieldOutcome::Invalid(e)) => {
                    writeln!(self.messages, "Error: {e}")?;
                    writeln!(self.messages)?;
                }
                Err(FieldOutcome::EndOfInput) => {
                    if self.fragments.len() >= MIN_FRAGMENTS {
                        return Ok(self.fragments);
                    }
                    if self.source.is_exhausted() {
                        return Err(CollectError::InputExhausted {
                            collected: self.fragments.len(),
                        });
                    }
                    writeln!(self.messages, "Error: must provide at least two fragments")?;
                    writeln!(self.messages)?;
                }
                Err(FieldOutcome::Abort) => {
                    writeln!(self.messages)?;
                    return Err(CollectError::Aborted);
                }
            }
        }
    }

    /// Ask for every field of the next fragment.
    ///
    /// The outer error is fatal; the inner one ends only this fragment.
    fn next_fragment(&mut self) -> Result<Result<Fragment, FieldOutcome>, CollectError> {
        let index = self.fragments.len();
        let default_name = default_fragment_name(index);
        writeln!(self.messages, "{default_name}:")?;

        let name = match self.source.read_line("  Name [optional]: ")? {
            Line::Text(name) => name,
            Line::EndOfInput => return Ok(Err(FieldOutcome::EndOfInput)),
            Line::Abort => return Ok(Err(FieldOutcome::Abort)),
        };

        let conc_text = match self.source.read_line("  Concentration: ")? {
            Line::Text(text) => text,
            Line::EndOfInput => return Ok(Err(FieldOutcome::EndOfInput)),
            Line::Abort => return Ok(Err(FieldOutcome::Abort)),
        };
        let conc = match parse_concentration(&conc_text) {
            Ok(conc) => conc,
            Err(e) => return Ok(Err(e.into())),
        };

        // Answers so far, in the same form a fragment string would use
        let mut entered = if name.trim().is_empty() {
            conc_text.clone()
        } else {
            format!("{name},{conc_text}")
        };

        let mut length_bp = None;
        if conc.unit.is_mass_based() {
            let length_text = match self.source.read_line("  Size [bp]: ")? {
                Line::Text(text) => text,
                Line::EndOfInput => return Ok(Err(FieldOutcome::EndOfInput)),
                Line::Abort => return Ok(Err(FieldOutcome::Abort)),
            };
            length_bp = match parse_length(&length_text) {
                Ok(length) => Some(length),
                Err(e) => return Ok(Err(e.into())),
            };
            entered = format!("{entered},{length_text}");
        }

        Ok(build_fragment(index, Some(name.as_str()), conc, length_bp, &entered).map_err(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays scripted responses, then reports end of input forever
    struct ScriptedSource {
        lines: VecDeque<Line>,
        prompts: Vec<String>,
    }

    impl ScriptedSource {
        fn new(lines: Vec<Line>) -> Self {
            Self {
                lines: lines.into(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineSource for ScriptedSource {
        fn read_line(&mut self, prompt: &str) -> Result<Line, CollectError> {
            self.prompts.push(prompt.to_string());
            Ok(self.lines.pop_front().unwrap_or(Line::EndOfInput))
        }

        fn is_exhausted(&self) -> bool {
            self.lines.is_empty()
        }
    }

    fn text(s: &str) -> Line {
        Line::Text(s.to_string())
    }

    #[test]
    fn test_collects_until_end_of_input() {
        let mut source = ScriptedSource::new(vec![
            text(""),
            text("70"),
            text("1800"),
            text("Gene"),
            text("34nM"),
            Line::EndOfInput,
        ]);
        let mut messages = Vec::new();
        let frags = FragmentCollector::new(&mut source, &mut messages)
            .collect()
            .unwrap();

        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].name, "Backbone");
        assert!((frags[0].conc_nm() - 70e6 / (650.0 * 1800.0)).abs() < 1e-9);
        assert_eq!(frags[1].name, "Gene");
        assert_eq!(frags[1].conc_nm(), 34.0);

        // Size is only asked for the mass-based backbone
        let size_prompts = source.prompts.iter().filter(|p| p.contains("Size")).count();
        assert_eq!(size_prompts, 1);

        let messages = String::from_utf8(messages).unwrap();
        assert!(messages.contains("Backbone:"));
        assert!(messages.contains("Insert #1:"));
    }

    #[test]
    fn test_bad_field_restarts_same_fragment() {
        let mut source = ScriptedSource::new(vec![
            text("bb"),
            text("30nM"),
            text("ins"),
            text("lots"),
            text("ins"),
            text("60"),
            text("long"),
            text("ins"),
            text("60"),
            text("1000"),
            Line::EndOfInput,
        ]);
        let mut messages = Vec::new();
        let frags = FragmentCollector::new(&mut source, &mut messages)
            .collect()
            .unwrap();

        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].name, "bb");
        assert_eq!(frags[1].name, "ins");

        let messages = String::from_utf8(messages).unwrap();
        assert!(messages.contains("Error: could not interpret 'lots' as a concentration"));
        assert!(messages.contains("Error: could not interpret 'long' as a fragment length"));
        // Each retry of the insert shows the same heading
        assert_eq!(messages.matches("Insert #1:").count(), 3);
    }

    #[test]
    fn test_zero_values_quote_the_answers() {
        let mut source = ScriptedSource::new(vec![
            text("bb"),
            text("0nM"),
            text("bb"),
            text("30nM"),
            text("ins"),
            text("60"),
            text("0"),
            text(""),
            text("60nM"),
            Line::EndOfInput,
        ]);
        let mut messages = Vec::new();
        let frags = FragmentCollector::new(&mut source, &mut messages)
            .collect()
            .unwrap();
        assert_eq!(frags.len(), 2);

        let messages = String::from_utf8(messages).unwrap();
        assert!(messages.contains("Error: 'bb,0nM' has a concentration of 0 nM"));
        assert!(messages.contains("Error: 'ins,60,0' has a length of 0 bp"));
    }

    #[test]
    fn test_early_end_of_input_resumes() {
        let mut source = ScriptedSource::new(vec![
            text(""),
            text("30nM"),
            Line::EndOfInput,
            text(""),
            text("60nM"),
            Line::EndOfInput,
        ]);
        let mut messages = Vec::new();
        let frags = FragmentCollector::new(&mut source, &mut messages)
            .collect()
            .unwrap();

        assert_eq!(frags.len(), 2);
        let messages = String::from_utf8(messages).unwrap();
        assert!(messages.contains("Error: must provide at least two fragments"));
    }

    #[test]
    fn test_abort_discards_everything() {
        let mut source = ScriptedSource::new(vec![
            text(""),
            text("30nM"),
            text(""),
            text("60nM"),
            Line::Abort,
        ]);
        let result = FragmentCollector::new(&mut source, io::sink()).collect();
        assert!(matches!(result, Err(CollectError::Aborted)));
    }

    #[test]
    fn test_exhausted_source_with_too_few_fragments() {
        let mut source = ScriptedSource::new(vec![text(""), text("30nM")]);
        let result = FragmentCollector::new(&mut source, io::sink()).collect();
        assert!(matches!(
            result,
            Err(CollectError::InputExhausted { collected: 1 })
        ));
    }

    #[test]
    fn test_editor_prompts_use_terminal() {
        assert_eq!(editor_config().behavior(), Behavior::PreferTerm);
    }

    #[test]
    fn test_reader_source() {
        let input = b"pUC19\r\n25nM\n\n70\n1800\n";
        let mut prompts = Vec::new();
        let mut source = ReaderSource::new(&input[..], &mut prompts);

        let frags = FragmentCollector::new(&mut source, io::sink())
            .collect()
            .unwrap();

        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].name, "pUC19");
        assert_eq!(frags[1].name, "Insert #1");
        assert_eq!(frags[1].length_bp, Some(1800));

        drop(source);
        let prompts = String::from_utf8(prompts).unwrap();
        assert!(prompts.contains("  Concentration: "));
    }
}
