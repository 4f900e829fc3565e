use std::io::BufRead;

use crate::{
    builder::{ClauseOk, ParserInfo},
    context::{ContextState, GenericContext},
    structures::clause::CClause,
    types::err::{self, ErrorKind},
};

/// Methods for building the formula of a context, each available only until a search has begun.
impl<R: rand::Rng> GenericContext<R> {
    fn formula_open(&mut self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {
                self.state = ContextState::Input;
                Ok(())
            }
            _ => Err(err::StateError::FormulaFixed.into()),
        }
    }

    /// See [Formula::clause_from_string](crate::structures::formula::Formula::clause_from_string).
    pub fn clause_from_string(&mut self, string: &str) -> Result<CClause, ErrorKind> {
        self.formula_open()?;
        self.formula.clause_from_string(string)
    }

    /// See [Formula::add_clause](crate::structures::formula::Formula::add_clause).
    pub fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, ErrorKind> {
        self.formula_open()?;
        self.formula.add_clause(clause)
    }

    /// See [Formula::read_lines](crate::structures::formula::Formula::read_lines).
    pub fn read_lines(&mut self, reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        self.formula_open()?;
        self.formula.read_lines(reader)
    }

    /// See [Formula::read_dimacs](crate::structures::formula::Formula::read_dimacs).
    pub fn read_dimacs(&mut self, reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        self.formula_open()?;
        self.formula.read_dimacs(reader)
    }
}
