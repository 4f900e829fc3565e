use std::io::BufRead;

use crate::{
    builder::{ClauseOk, ParserInfo},
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

impl Formula {
    /// Reads a formula with one clause per line into the formula.
    ///
    /// Each line is a whitespace separated list of literals, where a literal is the name of an atom optionally prefixed with '-'.
    /// Blank lines are skipped, and no clause terminator is required.
    ///
    /// ```rust
    /// # use otter_sls::structures::formula::Formula;
    /// let mut formula = Formula::default();
    ///
    /// let source = "
    /// 111 -112
    /// -111 112
    ///
    /// 111 -112
    /// ";
    ///
    /// let info = formula.read_lines(source.as_bytes()).unwrap();
    ///
    /// assert_eq!(info.added_atoms, 2);
    /// assert_eq!(info.added_clauses, 2);
    /// assert_eq!(info.duplicate_clauses, 1);
    /// ```
    pub fn read_lines(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let initial_atoms = self.atom_count();

        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            if buffer.trim().is_empty() {
                continue;
            }

            let the_clause = match self.clause_from_string(&buffer) {
                Ok(clause) => clause,
                Err(e) => {
                    log::error!(target: targets::BUILDER, "Line {line_counter}: {e}");
                    return Err(ErrorKind::from(err::ParseError::Line(line_counter)));
                }
            };

            match self.add_clause(the_clause)? {
                ClauseOk::Added => info.added_clauses += 1,
                ClauseOk::Duplicate => info.duplicate_clauses += 1,
            }
        }

        info.added_atoms = self.atom_count() - initial_atoms;
        log::info!(target: targets::BUILDER, "Read {} lines: {info:?}", line_counter);

        Ok(info)
    }
}

#[cfg(test)]
mod line_tests {
    use super::*;

    #[test]
    fn negation_without_atom() {
        let mut formula = Formula::default();
        let source = "p q\n- r\n";
        assert_eq!(
            formula.read_lines(source.as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Line(2)))
        );
    }

    #[test]
    fn failed_line_adds_no_atoms() {
        let mut formula = Formula::default();
        let source = "p q\nr - s\n";
        assert_eq!(
            formula.read_lines(source.as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Line(2)))
        );
        assert_eq!(formula.atom_count(), 2);
        assert_eq!(formula.atom_of("r"), None);
        assert_eq!(formula.clause_count(), 1);
    }

    #[test]
    fn no_trailing_newline() {
        let mut formula = Formula::default();
        let info = formula.read_lines("a b\n-a -b".as_bytes()).unwrap();
        assert_eq!(info.added_clauses, 2);
        assert_eq!(formula.clause_count(), 2);
    }
}
