//! The profile section of an Arlequin file.

use std::num::ParseIntError;

use crate::alphabet::Alphabet;

/// The marker that begins the profile section.
pub const PROFILE_MARKER: &str = "[Profile]";

/// The marker that begins the data section (and, with it, ends the profile
/// section).
pub const DATA_MARKER: &str = "[Data]";

/// The key declaring the type of data held in the file.
pub const DATA_TYPE_KEY: &str = "DataType";

/// The key declaring the symbol used for missing data.
pub const MISSING_DATA_KEY: &str = "MissingData";

/// The key declaring the number of samples in the data section.
pub const NB_SAMPLES_KEY: &str = "NbSamples";

/// The only data type supported by this crate.
pub const SUPPORTED_DATA_TYPE: &str = "DNA";

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a profile section.
#[derive(Debug)]
pub enum ParseError {
    /// The declared data type is not supported.
    UnsupportedDataType(String),

    /// The declared number of samples could not be parsed as an integer.
    InvalidSampleCount(ParseIntError, String),

    /// A recognized key carried no value.
    MissingValue(String),

    /// The file ended before the data section marker was reached.
    MissingDataSection,

    /// The profile never declared the number of samples.
    MissingSampleCount,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnsupportedDataType(data_type) => write!(
                f,
                "unsupported data type: expected \"{}\" data, found \"{}\"",
                SUPPORTED_DATA_TYPE, data_type
            ),
            ParseError::InvalidSampleCount(err, line) => {
                write!(f, "invalid sample count: {}\n\nline: {}", err, line)
            }
            ParseError::MissingValue(line) => {
                write!(f, "missing value for a recognized key\n\nline: {}", line)
            }
            ParseError::MissingDataSection => {
                write!(f, "the file ended before the start of the data section")
            }
            ParseError::MissingSampleCount => {
                write!(f, "the profile did not declare the number of samples")
            }
        }
    }
}

impl std::error::Error for ParseError {}

////////////////////////////////////////////////////////////////////////////////////////
// Profile
////////////////////////////////////////////////////////////////////////////////////////

/// The profile of an Arlequin file.
///
/// A profile governs how the data section that follows it is interpreted:
/// it carries the alphabet that residues are validated against and the
/// number of sample blocks to read. One profile is in effect for exactly
/// one parse call and is discarded afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// The alphabet for the data section.
    alphabet: Alphabet,

    /// The declared number of samples in the data section.
    nb_samples: usize,
}

impl Profile {
    /// Creates a new [`Profile`].
    pub(crate) fn new(alphabet: Alphabet, nb_samples: usize) -> Self {
        Self {
            alphabet,
            nb_samples,
        }
    }

    /// Returns the alphabet for the data section.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the declared number of samples in the data section.
    pub fn nb_samples(&self) -> usize {
        self.nb_samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_data_type_display() {
        let err = ParseError::UnsupportedDataType(String::from("RFLP"));

        assert_eq!(
            err.to_string(),
            "unsupported data type: expected \"DNA\" data, found \"RFLP\""
        );
    }

    #[test]
    fn invalid_sample_count_display() {
        let err = "abc".parse::<usize>().unwrap_err();
        let err = ParseError::InvalidSampleCount(err, String::from("NbSamples=abc"));

        assert_eq!(
            err.to_string(),
            "invalid sample count: invalid digit found in string\n\nline: NbSamples=abc"
        );
    }
}
