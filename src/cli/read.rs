use std::{io::BufReader, path::Path};

use otter_sls::{builder::ParserInfo, context::Context, types::err::ErrorKind};

pub(super) enum ReadError {
    FailedToOpen,
    ParseError(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen => write!(f, "Failed to open formula file."),
            Self::ParseError(err) => write!(f, "Parse error: '{err}'."),
        }
    }
}

/// Reads the formula at `path` to `context` and writes a report.
pub(super) fn read_formula(
    path: &Path,
    dimacs: bool,
    context: &mut Context,
) -> Result<ParserInfo, ReadError> {
    println!("c Reading formula from {path:?}");

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let parse_report = match dimacs {
        true => context.read_dimacs(BufReader::new(&file)),
        false => context.read_lines(BufReader::new(&file)),
    };

    match parse_report {
        Ok(info) => {
            if let Some(count) = info.expected_atoms {
                println!("c Expected atoms:    {count}");
            }
            println!("c Atom count:        {}", info.added_atoms);

            if let Some(count) = info.expected_clauses {
                println!("c Expected clauses:  {count}");
            }
            println!("c Clause count:      {}", info.added_clauses);

            if info.duplicate_clauses > 0 {
                println!("c Duplicate clauses: {}", info.duplicate_clauses);
            }

            Ok(info)
        }

        Err(e) => Err(ReadError::ParseError(e)),
    }
}
