//! Reading branch traces.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use crate::Outcome;
use crate::error::TraceError;

/// A single executed conditional branch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BranchRecord {
    pub pc: usize,
    pub outcome: Outcome,
}
impl BranchRecord {
    pub fn new(pc: usize, outcome: Outcome) -> Self {
        Self { pc, outcome }
    }

    /// Parse a record in the form `<hex pc> <t|n>`.
    ///
    /// Returns `None` if the line is not a valid record.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let pc = fields.next()?;
        let outcome = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        let pc = pc.strip_prefix("0x")
            .or_else(|| pc.strip_prefix("0X"))
            .unwrap_or(pc);
        let pc = usize::from_str_radix(pc, 16).ok()?;
        let outcome = match outcome {
            "t" | "T" => Outcome::T,
            "n" | "N" => Outcome::N,
            _ => return None,
        };
        Some(Self { pc, outcome })
    }
}

/// Pulls [BranchRecord]s from a text trace, one record per line.
///
/// Blank lines are skipped.
pub struct TraceReader<R> {
    inner: R,
    line: usize,
    buf: String,
}
impl TraceReader<BufReader<File>> {
    /// Open a trace file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let f = File::open(path)?;
        Ok(Self::new(BufReader::new(f)))
    }
}
impl<R: BufRead> TraceReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line: 0, buf: String::new() }
    }

    /// Return the number of lines consumed so far.
    pub fn lines_read(&self) -> usize { self.line }
}
impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<BranchRecord, TraceError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.inner.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {},
                Err(e) => return Some(Err(e.into())),
            }
            self.line += 1;

            let content = self.buf.trim();
            if content.is_empty() {
                continue;
            }
            return Some(BranchRecord::parse(content).ok_or_else(|| {
                TraceError::Malformed {
                    line: self.line,
                    content: content.to_string(),
                }
            }));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_records() {
        assert_eq!(BranchRecord::parse("00a3b5fc t"),
            Some(BranchRecord::new(0x00a3_b5fc, Outcome::T)));
        assert_eq!(BranchRecord::parse("0x1000 n"),
            Some(BranchRecord::new(0x1000, Outcome::N)));
        assert_eq!(BranchRecord::parse("  40 \tT "),
            Some(BranchRecord::new(0x40, Outcome::T)));
        assert_eq!(BranchRecord::parse("zz t"), None);
        assert_eq!(BranchRecord::parse("1000 x"), None);
        assert_eq!(BranchRecord::parse("1000"), None);
        assert_eq!(BranchRecord::parse("1000 t extra"), None);
    }

    #[test]
    fn reader_skips_blank_lines() {
        let input = "00a3b5fc t\n\n00a3b604 n\r\n   \n00a3b5fc t";
        let records: Vec<BranchRecord> = TraceReader::new(Cursor::new(input))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records, vec![
            BranchRecord::new(0x00a3_b5fc, Outcome::T),
            BranchRecord::new(0x00a3_b604, Outcome::N),
            BranchRecord::new(0x00a3_b5fc, Outcome::T),
        ]);
    }

    #[test]
    fn reader_reports_line_numbers() {
        let input = "1000 t\n\nbogus\n1004 n\n";
        let mut r = TraceReader::new(Cursor::new(input));
        assert!(r.next().unwrap().is_ok());
        match r.next() {
            Some(Err(TraceError::Malformed { line, content })) => {
                assert_eq!(line, 3);
                assert_eq!(content, "bogus");
            },
            other => panic!("unexpected {:?}", other),
        }
        assert!(r.next().unwrap().is_ok());
        assert!(r.next().is_none());
        assert_eq!(r.lines_read(), 4);
    }
}
