//! A haplotype line within a sample block.

use std::num::ParseIntError;
use std::str::FromStr;

/// The delimiter between the fields of a haplotype line when displayed.
const HAPLOTYPE_DELIMITER: char = ' ';

/// The number of expected fields in a haplotype line.
pub const NUM_HAPLOTYPE_FIELDS: usize = 3;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a haplotype line.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the haplotype line.
    IncorrectNumberOfFields(usize),

    /// An invalid frequency.
    InvalidFrequency(ParseIntError),

    /// A frequency of zero.
    ZeroFrequency,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in haplotype line: expected \
                 {NUM_HAPLOTYPE_FIELDS} fields, found {n} fields"
            ),
            ParseError::InvalidFrequency(err) => write!(f, "invalid frequency: {err}"),
            ParseError::ZeroFrequency => write!(
                f,
                "invalid frequency: expected a positive number of individuals, found zero"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

////////////////////////////////////////////////////////////////////////////////////////
// Haplotype
////////////////////////////////////////////////////////////////////////////////////////

/// A haplotype line within the data section of an Arlequin file.
///
/// Each line names a haplotype, the number of individuals within the
/// current sample that carry it, and its residue sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Haplotype {
    /// The haplotype identifier.
    id: String,

    /// The number of individuals carrying the haplotype.
    frequency: u64,

    /// The residue sequence.
    residues: String,
}

impl Haplotype {
    /// Returns the haplotype identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use arlequin::record::Haplotype;
    ///
    /// let haplotype = "h1 2 ACGT".parse::<Haplotype>()?;
    /// assert_eq!(haplotype.id(), "h1");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the number of individuals carrying the haplotype.
    ///
    /// # Examples
    ///
    /// ```
    /// use arlequin::record::Haplotype;
    ///
    /// let haplotype = "h1 2 ACGT".parse::<Haplotype>()?;
    /// assert_eq!(haplotype.frequency(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Returns the residue sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use arlequin::record::Haplotype;
    ///
    /// let haplotype = "h1 2 ACGT".parse::<Haplotype>()?;
    /// assert_eq!(haplotype.residues(), "ACGT");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn residues(&self) -> &str {
        &self.residues
    }

    /// Consumes `self` and returns the identifier, frequency, and residues.
    pub fn into_parts(self) -> (String, u64, String) {
        (self.id, self.frequency, self.residues)
    }
}

impl FromStr for Haplotype {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split_whitespace().collect::<Vec<_>>();

        if parts.len() != NUM_HAPLOTYPE_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        let frequency = parts[1]
            .parse::<u64>()
            .map_err(ParseError::InvalidFrequency)?;

        if frequency == 0 {
            return Err(ParseError::ZeroFrequency);
        }

        Ok(Haplotype {
            id: parts[0].to_string(),
            frequency,
            residues: parts[2].to_string(),
        })
    }
}

impl std::fmt::Display for Haplotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.id, HAPLOTYPE_DELIMITER, self.frequency, HAPLOTYPE_DELIMITER, self.residues
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_haplotype() {
        let haplotype = "h1 3 ACGT".parse::<Haplotype>().unwrap();

        assert_eq!(haplotype.id(), "h1");
        assert_eq!(haplotype.frequency(), 3);
        assert_eq!(haplotype.residues(), "ACGT");
    }

    #[test]
    fn extra_whitespace_between_fields() {
        let haplotype = "h1\t 3   ACGT".parse::<Haplotype>().unwrap();

        assert_eq!(haplotype.id(), "h1");
        assert_eq!(haplotype.frequency(), 3);
        assert_eq!(haplotype.residues(), "ACGT");
    }

    #[test]
    fn invalid_number_of_fields() {
        let err = "h1 3".parse::<Haplotype>().unwrap_err();

        assert!(matches!(err, ParseError::IncorrectNumberOfFields(2)));
        assert_eq!(
            err.to_string(),
            "invalid number of fields in haplotype line: expected 3 fields, found 2 fields"
        );
    }

    #[test]
    fn invalid_frequency() {
        let err = "h1 x ACGT".parse::<Haplotype>().unwrap_err();

        assert!(matches!(err, ParseError::InvalidFrequency(_)));
        assert_eq!(
            err.to_string(),
            "invalid frequency: invalid digit found in string"
        );
    }

    #[test]
    fn negative_frequency() {
        let err = "h1 -1 ACGT".parse::<Haplotype>().unwrap_err();

        assert!(matches!(err, ParseError::InvalidFrequency(_)));
    }

    #[test]
    fn zero_frequency() {
        let err = "h1 0 ACGT".parse::<Haplotype>().unwrap_err();

        assert!(matches!(err, ParseError::ZeroFrequency));
        assert_eq!(
            err.to_string(),
            "invalid frequency: expected a positive number of individuals, found zero"
        );
    }

    #[test]
    fn display() {
        let haplotype = "h1   3\tACGT".parse::<Haplotype>().unwrap();
        assert_eq!(haplotype.to_string(), "h1 3 ACGT");
    }
}
