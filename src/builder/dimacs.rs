use std::io::BufRead;

use crate::{
    builder::{ClauseOk, ParserInfo},
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl Formula {
    /// Reads a DIMACS formula into the formula.
    ///
    /// Atoms are named by the (absolute value of the) integers of the DIMACS input, and so a valuation of the formula may be written with the same names.
    ///
    /// ```rust
    /// # use otter_sls::structures::formula::Formula;
    /// let mut formula = Formula::default();
    ///
    /// let dimacs = "
    /// c an example
    /// p cnf 3 3
    ///  1  2    0
    /// -1  2    0
    ///  1 -2 -3 0
    /// ";
    ///
    /// let info = formula.read_dimacs(dimacs.as_bytes()).unwrap();
    /// assert_eq!(info.expected_atoms, Some(3));
    /// assert_eq!(info.added_clauses, 3);
    /// assert_eq!(formula.name_of(2), Ok("3"));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let initial_atoms = self.atom_count();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer = CClause::default();
        let mut line_counter = 0;

        // first phase, read until the formula begins
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace().skip(2);

                    let mut expected = || -> Result<usize, ErrorKind> {
                        match problem_details.next().map(|count| count.parse::<usize>()) {
                            Some(Ok(count)) => Ok(count),
                            _ => Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                        }
                    };

                    info.expected_atoms = Some(expected()?);
                    info.expected_clauses = Some(expected()?);

                    buffer.clear();
                    break 'preamble_loop;
                }

                // The buffer holds the first line of the formula.
                _ => break 'preamble_loop,
            }
        }

        // second phase, read until the formula ends
        // Atoms from the first atom of the clause being read are forgotten on an error.
        let mut clause_atoms = self.atom_count();

        'formula_loop: loop {
            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') | None => {}
                _ => {
                    for item in buffer.split_whitespace() {
                        let the_literal = match item.parse::<isize>() {
                            Ok(0) if !item.starts_with('-') => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                match self.add_clause(the_clause)? {
                                    ClauseOk::Added => info.added_clauses += 1,
                                    ClauseOk::Duplicate => info.duplicate_clauses += 1,
                                }
                                clause_atoms = self.atom_count();
                                continue;
                            }

                            Ok(int) if int != 0 => {
                                match self.atom_from_string(&int.unsigned_abs().to_string()) {
                                    Ok(atom) => CLiteral::new(atom, int.is_positive()),
                                    Err(e) => {
                                        self.forget_atoms_from(clause_atoms);
                                        return Err(e);
                                    }
                                }
                            }

                            _ => {
                                log::error!(target: targets::BUILDER, "Line {line_counter}: unable to read '{item}'");
                                self.forget_atoms_from(clause_atoms);
                                return Err(ErrorKind::from(err::ParseError::Line(line_counter)));
                            }
                        };

                        if !clause_buffer.iter().any(|l| *l == the_literal) {
                            clause_buffer.push(the_literal);
                        }
                    }
                }
            }

            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => {
                    self.forget_atoms_from(clause_atoms);
                    return Err(ErrorKind::from(err::ParseError::Line(line_counter)));
                }
            }
        }

        // An unterminated final clause is accepted.
        if !clause_buffer.is_empty() {
            match self.add_clause(clause_buffer)? {
                ClauseOk::Added => info.added_clauses += 1,
                ClauseOk::Duplicate => info.duplicate_clauses += 1,
            }
        }

        info.added_atoms = self.atom_count() - initial_atoms;

        if let Some(expected) = info.expected_clauses {
            if expected != info.added_clauses + info.duplicate_clauses {
                log::warn!(target: targets::BUILDER, "Expected {expected} clauses, read {}", info.added_clauses + info.duplicate_clauses);
            }
        }

        Ok(info)
    }
}

#[cfg(test)]
mod dimacs_tests {
    use super::*;

    #[test]
    fn no_preamble() {
        let mut formula = Formula::default();
        let info = formula.read_dimacs("1 -2 0\n2 3 0\n".as_bytes()).unwrap();

        assert_eq!(info.expected_atoms, None);
        assert_eq!(info.added_clauses, 2);
        assert_eq!(info.added_atoms, 3);
    }

    #[test]
    fn clause_over_lines() {
        let mut formula = Formula::default();
        let info = formula
            .read_dimacs("p cnf 3 1\n1 -2\n 3 0\n".as_bytes())
            .unwrap();

        assert_eq!(info.added_clauses, 1);
        assert_eq!(formula.clauses()[0].len(), 3);
    }

    #[test]
    fn bad_problem() {
        let mut formula = Formula::default();
        assert_eq!(
            formula.read_dimacs("p cnf x 1\n1 0\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn bad_literal() {
        let mut formula = Formula::default();
        assert_eq!(
            formula.read_dimacs("p cnf 2 1\n1 two 0\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Line(2)))
        );
        assert_eq!(formula.atom_count(), 0);
    }

    #[test]
    fn negative_zero() {
        let mut formula = Formula::default();
        assert_eq!(
            formula.read_dimacs("p cnf 2 2\n2 0\n1 -0 0\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Line(3)))
        );
        assert_eq!(formula.names().collect::<Vec<_>>(), vec!["2"]);
        assert_eq!(formula.atom_of("0"), None);
        assert_eq!(formula.clause_count(), 1);
    }

    #[test]
    fn failed_clause_over_lines() {
        let mut formula = Formula::default();
        assert!(formula
            .read_dimacs("1 0\n2 3\n-4 x 0\n".as_bytes())
            .is_err());
        assert_eq!(formula.names().collect::<Vec<_>>(), vec!["1"]);
    }
}
