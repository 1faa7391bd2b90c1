//! A sample block within the data section.

use std::num::ParseIntError;

use crate::record::Haplotype;
use crate::record::haplotype;

/// The key declaring a sample's name.
pub const SAMPLE_NAME_KEY: &str = "SampleName";

/// The key that opens a sample's data block.
///
/// Lines carrying this key are skipped while reading haplotypes.
pub const SAMPLE_DATA_KEY: &str = "SampleData";

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a sample block.
#[derive(Debug)]
pub enum ParseError {
    /// The file ended before the name of the next sample was found.
    MissingSampleName,

    /// A recognized key carried no value.
    MissingValue(String),

    /// The declared sample size could not be parsed as an integer.
    InvalidSampleSize(ParseIntError, String),

    /// The file ended in the middle of a sample block.
    AbruptEndInSample(String),

    /// An invalid haplotype line.
    InvalidHaplotype(haplotype::ParseError, String),

    /// A haplotype carried a residue outside the alphabet.
    InvalidResidue(char, String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingSampleName => {
                write!(f, "the file ended before the next sample name")
            }
            ParseError::MissingValue(line) => {
                write!(f, "missing value for a recognized key\n\nline: {}", line)
            }
            ParseError::InvalidSampleSize(err, line) => {
                write!(f, "invalid sample size: {}\n\nline: {}", err, line)
            }
            ParseError::AbruptEndInSample(name) => {
                write!(f, "the file ended in the middle of sample \"{}\"", name)
            }
            ParseError::InvalidHaplotype(err, line) => {
                write!(f, "invalid haplotype line: {}\n\nline: {}", err, line)
            }
            ParseError::InvalidResidue(symbol, id) => write!(
                f,
                "invalid residue in haplotype \"{}\": \"{}\" is not in the alphabet",
                id, symbol
            ),
        }
    }
}

impl std::error::Error for ParseError {}

////////////////////////////////////////////////////////////////////////////////////////
// Sample
////////////////////////////////////////////////////////////////////////////////////////

/// A sample block within the data section of an Arlequin file.
///
/// A sample names a group of haplotype lines together with the number of
/// individuals those lines account for. Samples are transient: they exist
/// only while an alignment is being assembled and are consumed into
/// records immediately afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sample {
    /// The sample name.
    name: String,

    /// The declared number of individuals in the sample.
    size: u64,

    /// The haplotypes observed in the sample.
    haplotypes: Vec<Haplotype>,
}

impl Sample {
    /// Creates a new [`Sample`].
    pub(crate) fn new(name: String, size: u64, haplotypes: Vec<Haplotype>) -> Self {
        Self {
            name,
            size,
            haplotypes,
        }
    }

    /// Returns the sample name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared number of individuals in the sample.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the haplotypes observed in the sample.
    pub fn haplotypes(&self) -> &[Haplotype] {
        &self.haplotypes
    }

    /// Returns the number of individuals accounted for by the observed
    /// haplotypes.
    ///
    /// This reconciles with [`size`](Self::size) for a well-formed block.
    pub fn observed_size(&self) -> u64 {
        self.haplotypes
            .iter()
            .map(|haplotype| haplotype.frequency())
            .sum()
    }

    /// Consumes `self` and returns the name, declared size, and haplotypes.
    pub fn into_parts(self) -> (String, u64, Vec<Haplotype>) {
        (self.name, self.size, self.haplotypes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_size_sums_frequencies() {
        let haplotypes = vec![
            "h1 2 ACGT".parse::<Haplotype>().unwrap(),
            "h2 1 ACGA".parse::<Haplotype>().unwrap(),
        ];
        let sample = Sample::new(String::from("Pop1"), 3, haplotypes);

        assert_eq!(sample.name(), "Pop1");
        assert_eq!(sample.size(), 3);
        assert_eq!(sample.observed_size(), 3);
        assert_eq!(sample.haplotypes().len(), 2);
    }
}
