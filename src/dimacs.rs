use std::error::Error;
use std::fmt;

use crate::data::Lit;
use crate::formula::Formula;

/// A malformed DIMACS document: missing or unparsable header, or a clause
/// line that doesn't parse as whitespace-separated integers.
#[derive(Debug)]
pub struct DimacsError(String);

impl fmt::Display for DimacsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed DIMACS input: {}", self.0)
    }
}

impl Error for DimacsError {}

/// Parses DIMACS CNF text into a [`Formula`].
///
/// `c` lines are comments, the header line is `p cnf <vars> <clauses>`, and
/// every following non-empty line holds one clause: a whitespace-separated
/// list of signed integers terminated by a trailing `0`. A clause spanning
/// more than one line is not supported — each clause is read from one line.
pub struct Dimacs;

impl Dimacs {
    pub fn parse(input: &str) -> Result<Formula, Box<dyn Error>> {
        let mut lines = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with('c'));

        let header = lines
            .next()
            .ok_or_else(|| DimacsError("missing header line".to_string()))?;
        let num_vars = Self::parse_header(header)?;

        let mut formula = Formula::new(num_vars);
        for line in lines {
            let literals: Vec<i32> = line
                .split_whitespace()
                .map(|tok| tok.parse::<i32>().map_err(|e| Box::new(e) as Box<dyn Error>))
                .collect::<Result<Vec<_>, _>>()?;
            let literals: Vec<Lit> = literals.into_iter().filter(|&n| n != 0).map(Lit::new).collect();
            formula.push_clause(literals);
        }

        Ok(formula)
    }

    fn parse_header(line: &str) -> Result<u32, Box<dyn Error>> {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some("p"), Some("cnf"), Some(vars), Some(_clauses)) => {
                vars.parse::<u32>().map_err(|e| Box::new(e) as Box<dyn Error>)
            }
            _ => Err(Box::new(DimacsError(format!("bad header line: {line}")))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_clauses() {
        let input = "\
c a comment
p cnf 3 2
1 -2 3 0
-1 2 0
";
        let formula = Dimacs::parse(input).unwrap();
        assert_eq!(formula.num_vars(), 3);
        assert_eq!(formula.num_clauses(), 2);
    }

    #[test]
    fn truncated_clause_count_is_tolerated() {
        let input = "p cnf 2 5\n1 2 0\n";
        let formula = Dimacs::parse(input).unwrap();
        assert_eq!(formula.num_clauses(), 1);
    }

    #[test]
    fn rejects_missing_header() {
        assert!(Dimacs::parse("1 2 0\n").is_err());
    }

    #[test]
    fn rejects_unparsable_header() {
        assert!(Dimacs::parse("p cnf x y\n").is_err());
    }
}
