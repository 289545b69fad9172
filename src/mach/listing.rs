use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Line, LineNumber};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::ops::RangeInclusive;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
struct Entry {
    text: String,
    statement: Option<Statement>,
}

/// ## Program store
///
/// Lines are keyed by number so traversal is always ascending,
/// whatever order they were entered in.

#[derive(Debug, Default)]
pub struct Listing {
    source: BTreeMap<LineNumber, Entry>,
}

impl Listing {
    pub fn new() -> Listing {
        Listing::default()
    }

    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Stores source text; any statement previously attached to the
    /// line is dropped until `set_statement` supplies a new one.
    pub fn add_line(&mut self, number: LineNumber, text: &str) {
        log::debug!("line {} stored", number);
        self.source.insert(
            number,
            Entry {
                text: text.to_string(),
                statement: None,
            },
        );
    }

    pub fn set_statement(&mut self, number: LineNumber, statement: Statement) -> Result<()> {
        match self.source.get_mut(&number) {
            Some(entry) => {
                entry.statement = Some(statement);
                Ok(())
            }
            None => Err(error!(UndefinedLine, number)),
        }
    }

    /// Parses and stores a line. The store is untouched when the
    /// statement fails to parse.
    pub fn insert(&mut self, line: &Line) -> Result<()> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(IllegalDirect)),
        };
        if line.is_empty() {
            self.remove_line(number);
            return Ok(());
        }
        let statement = line.statement()?;
        self.add_line(number, line.text());
        self.set_statement(number, statement)
    }

    /// Removing a line that is not stored does nothing.
    pub fn remove_line(&mut self, number: LineNumber) -> bool {
        let removed = self.source.remove(&number).is_some();
        if removed {
            log::debug!("line {} removed", number);
        }
        removed
    }

    pub fn contains(&self, number: LineNumber) -> bool {
        self.source.contains_key(&number)
    }

    pub fn first(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    /// The next stored line above `after`. `after` need not be stored.
    pub fn next(&self, after: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(after), Unbounded))
            .next()
            .map(|(number, _)| *number)
    }

    pub fn text(&self, number: LineNumber) -> &str {
        match self.source.get(&number) {
            Some(entry) => &entry.text,
            None => "",
        }
    }

    pub fn statement(&self, number: LineNumber) -> Result<&Statement> {
        match self.source.get(&number).and_then(|e| e.statement.as_ref()) {
            Some(statement) => Ok(statement),
            None => Err(error!(UndefinedLine, number)),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineNumber, &str)> {
        self.source.iter().map(|(n, e)| (*n, e.text.as_str()))
    }

    /// An empty iterator when the range is backwards.
    pub fn list(&self, range: RangeInclusive<LineNumber>) -> impl Iterator<Item = &str> {
        let (start, end) = range.into_inner();
        self.source
            .range(start..)
            .take_while(move |(number, _)| **number <= end)
            .map(|(_, e)| e.text.as_str())
    }

    /// Replaces the program with the lines of a file. Blank lines are
    /// skipped. An error not already tied to a program line carries the
    /// 1-based line of the file. On error the program is unchanged.
    pub fn load_str(&mut self, s: &str) -> Result<()> {
        let mut listing = Listing::new();
        for (index, text) in s.lines().enumerate() {
            let file_line = (index + 1) as LineNumber;
            if text.trim().is_empty() {
                continue;
            }
            let line = match Line::new(text) {
                Ok(line) => line,
                Err(e) => return Err(Listing::file_error(e, file_line)),
            };
            if line.is_direct() {
                return Err(error!(DirectStatementInFile, file_line));
            }
            if let Err(e) = listing.insert(&line) {
                return Err(Listing::file_error(e, file_line));
            }
        }
        *self = listing;
        Ok(())
    }

    fn file_error(e: Error, file_line: LineNumber) -> Error {
        match e.line_number() {
            Some(_) => e,
            None => e.in_line_number(file_line),
        }
    }

    /// The program as text, one line per stored line.
    pub fn save_string(&self) -> String {
        self.lines().map(|(_, text)| format!("{}\n", text)).collect()
    }
}
