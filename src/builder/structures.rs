use crate::{
    builder::ClauseOk,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// Methods for building the formula.
impl Formula {
    /// Returns a fresh atom with the given external name.
    ///
    /// The name is not checked against existing names, see [atom_from_string](Formula::atom_from_string).
    pub fn fresh_atom(&mut self, name: &str) -> Result<Atom, err::FormulaError> {
        let atom = match Atom::try_from(self.names.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(err::FormulaError::AtomsExhausted),
        };

        self.names.push(name.to_owned());
        self.atoms.insert(name.to_owned(), atom);
        log::trace!(target: targets::BUILDER, "Atom {atom} named {name}");

        Ok(atom)
    }

    /// The atom named `name`, introducing a fresh atom if `name` has not been seen.
    pub fn atom_from_string(&mut self, name: &str) -> Result<Atom, ErrorKind> {
        if name.is_empty() {
            return Err(ErrorKind::from(err::ParseError::Empty));
        }

        match self.atom_of(name) {
            Some(atom) => Ok(atom),
            None => Ok(self.fresh_atom(name)?),
        }
    }

    /// A literal from a string, where a leading '-' indicates negative polarity.
    ///
    /// ```rust
    /// # use otter_sls::structures::formula::Formula;
    /// # use otter_sls::structures::literal::Literal;
    /// let mut formula = Formula::default();
    /// let literal = formula.literal_from_string("-1-2-3").unwrap();
    ///
    /// assert!(!literal.polarity());
    /// assert_eq!(formula.name_of(literal.atom()), Ok("1-2-3"));
    /// assert!(formula.literal_from_string("-").is_err());
    /// ```
    pub fn literal_from_string(&mut self, string: &str) -> Result<CLiteral, ErrorKind> {
        let trimmed_string = string.trim();
        if trimmed_string.is_empty() {
            return Err(ErrorKind::from(err::ParseError::Empty));
        }

        let (name, polarity) = match trimmed_string.strip_prefix('-') {
            Some("") => return Err(ErrorKind::from(err::ParseError::Negation)),
            Some(name) => (name, false),
            None => (trimmed_string, true),
        };

        let atom = self.atom_from_string(name)?;
        Ok(CLiteral::new(atom, polarity))
    }

    /// A clause from a string of whitespace separated literals.
    ///
    /// Repeated literals are collapsed, and otherwise the order of literals is preserved.
    ///
    /// Fresh atoms are introduced for unseen names as the clause is built, and kept whether or not the clause is added.
    /// If some literal cannot be read no atom is introduced.
    pub fn clause_from_string(&mut self, string: &str) -> Result<CClause, ErrorKind> {
        let initial_atoms = self.atom_count();
        let mut the_clause = CClause::default();

        for string_literal in string.split_whitespace() {
            let the_literal = match self.literal_from_string(string_literal) {
                Ok(literal) => literal,
                Err(e) => {
                    self.forget_atoms_from(initial_atoms);
                    return Err(e);
                }
            };
            if !the_clause.iter().any(|l| *l == the_literal) {
                the_clause.push(the_literal);
            }
        }
        Ok(the_clause)
    }

    /// Forgets each atom from `atom_count` onwards.
    ///
    /// No clause of the formula may mention a forgotten atom.
    pub(crate) fn forget_atoms_from(&mut self, atom_count: usize) {
        if atom_count < self.names.len() {
            for name in self.names.drain(atom_count..) {
                self.atoms.remove(&name);
            }
            log::trace!(target: targets::BUILDER, "Atoms from {atom_count} forgotten");
        }
    }

    /// Adds a clause to the formula, unless the clause is already part of the formula.
    ///
    /// Each atom of the clause must be an atom of the formula.
    pub fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, ErrorKind> {
        if clause.is_empty() {
            return Err(ErrorKind::from(err::FormulaError::EmptyClause));
        }

        if let Some(literal) = clause
            .iter()
            .find(|literal| literal.atom() as usize >= self.atom_count())
        {
            log::warn!(target: targets::BUILDER, "Clause mentions unknown atom {}", literal.atom());
            return Err(ErrorKind::from(err::FormulaError::AtomOutOfRange(
                literal.atom(),
            )));
        }

        if self.clause_keys.contains_key(&clause) {
            log::trace!(target: targets::BUILDER, "Duplicate clause skipped");
            return Ok(ClauseOk::Duplicate);
        }

        let key = self.clauses.len();
        self.clause_keys.insert(clause.clone(), key);
        self.clauses.push(clause);

        Ok(ClauseOk::Added)
    }
}
