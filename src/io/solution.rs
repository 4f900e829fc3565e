/*!
Solutions, as a valuation written with the external names of atoms.

A solution has one line for each atom, in atom order.
Each line is the name of the atom, prefixed with '-' if the atom is valued false.

```rust
# use otter_sls::structures::formula::Formula;
# use otter_sls::io::solution::{read_solution, write_solution};
let mut formula = Formula::default();
let clause = formula.clause_from_string("p -q r").unwrap();
formula.add_clause(clause).unwrap();

let mut buffer = Vec::default();
write_solution(&formula, &vec![true, false, true], &mut buffer).unwrap();
assert_eq!(String::from_utf8_lossy(&buffer), "p\n-q\nr\n");

let valuation = read_solution(&formula, buffer.as_slice()).unwrap();
assert_eq!(valuation, vec![true, false, true]);
```
*/

use std::io::{BufRead, Write};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        formula::Formula,
        valuation::{CValuation, Valuation},
    },
    types::err::{self, ErrorKind},
};

/// Writes `valuation` as a solution of `formula`.
///
/// The valuation must value exactly the atoms of the formula.
pub fn write_solution(
    formula: &Formula,
    valuation: &impl Valuation,
    mut writer: impl Write,
) -> Result<(), ErrorKind> {
    if valuation.atom_count() != formula.atom_count() {
        return Err(err::ValuationError::Incomplete {
            expected: formula.atom_count(),
            found: valuation.atom_count(),
        }
        .into());
    }

    for (atom, value) in valuation.atom_value_pairs() {
        let name = formula.name_of(atom)?;
        match value {
            true => writeln!(writer, "{name}")?,
            false => writeln!(writer, "-{name}")?,
        }
    }

    writer.flush()?;
    Ok(())
}

/// Reads a solution of `formula`, returning the valuation written.
///
/// Blank lines are skipped.
/// Every atom of the formula must be valued, and every name must be the name of some atom of the formula.
/// If an atom is valued more than once, the last value is kept.
pub fn read_solution(formula: &Formula, reader: impl BufRead) -> Result<CValuation, ErrorKind> {
    let mut values: Vec<Option<bool>> = vec![None; formula.atom_count()];

    for (index, line) in reader.lines().enumerate() {
        let Ok(line) = line else {
            return Err(err::ParseError::Line(index + 1).into());
        };
        let token = line.trim();
        if token.is_empty() {
            continue;
        }

        let (name, value) = match token.strip_prefix('-') {
            Some("") => return Err(err::ParseError::Line(index + 1).into()),
            Some(name) => (name, false),
            None => (token, true),
        };

        match formula.atom_of(name) {
            Some(atom) => values[atom as usize] = Some(value),
            None => {
                log::error!(target: targets::VALUATION, "Unknown name '{name}' at line {}", index + 1);
                return Err(err::ValuationError::UnknownName(name.to_owned()).into());
            }
        }
    }

    let valuation: Option<CValuation> = values.iter().copied().collect();
    match valuation {
        Some(valuation) => Ok(valuation),
        None => Err(err::ValuationError::Incomplete {
            expected: formula.atom_count(),
            found: values.iter().filter(|value| value.is_some()).count(),
        }
        .into()),
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// Writes the current valuation as a solution.
    /// See [write_solution].
    pub fn write_solution(&self, writer: impl Write) -> Result<(), ErrorKind> {
        write_solution(&self.formula, &self.valuation, writer)
    }
}

#[cfg(test)]
mod solution_tests {
    use super::*;

    fn formula_from(clauses: &[&str]) -> Formula {
        let mut formula = Formula::default();
        for clause in clauses {
            let clause = formula.clause_from_string(clause).unwrap();
            formula.add_clause(clause).unwrap();
        }
        formula
    }

    #[test]
    fn unknown_name() {
        let formula = formula_from(&["p q"]);
        assert_eq!(
            read_solution(&formula, "p\n-z\n".as_bytes()),
            Err(ErrorKind::Valuation(err::ValuationError::UnknownName(
                "z".to_string()
            )))
        );
    }

    #[test]
    fn missing_atom() {
        let formula = formula_from(&["p q r"]);
        assert_eq!(
            read_solution(&formula, "p\n\n-r\n".as_bytes()),
            Err(ErrorKind::Valuation(err::ValuationError::Incomplete {
                expected: 3,
                found: 2
            }))
        );
    }

    #[test]
    fn bare_negation() {
        let formula = formula_from(&["p"]);
        assert_eq!(
            read_solution(&formula, "p\n-\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Line(2)))
        );
    }

    #[test]
    fn write_unset() {
        let formula = formula_from(&["p"]);
        let mut buffer = Vec::default();
        assert!(write_solution(&formula, &CValuation::default(), &mut buffer).is_err());
        assert!(buffer.is_empty());
    }
}
