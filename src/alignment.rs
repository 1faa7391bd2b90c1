//! Alignments of annotated haplotype records.

pub mod alignments;

pub use alignments::Alignments;

use crate::alphabet::Alphabet;
use crate::record::Record;

/// An alignment: an ordered collection of records sharing one alphabet.
///
/// One alignment is produced per profile found in the input. Records
/// appear in the order they were encountered: sample order first, then
/// line order within each sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alignment {
    /// The alphabet shared by every record.
    alphabet: Alphabet,

    /// The records, in encounter order.
    records: Vec<Record>,
}

impl Alignment {
    /// Creates a new, empty [`Alignment`] over the given alphabet.
    pub(crate) fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            records: Vec::new(),
        }
    }

    /// Appends a record to the alignment.
    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Returns the alphabet shared by every record.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the records within the alignment.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=2\nh1 1 ACGT\nh2 1 ACGA";
    /// let mut reader = arlequin::Reader::new(&data[..]);
    ///
    /// let alignment = reader.alignments().next().unwrap()?;
    ///
    /// assert_eq!(alignment.records().len(), 2);
    /// assert_eq!(alignment.records()[0].id(), "h1");
    /// assert_eq!(alignment.records()[1].id(), "h2");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records within the alignment.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the alignment contains no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the records within the alignment.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl IntoIterator for Alignment {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// A source of alignments.
///
/// Implementors produce alignments one at a time until the underlying
/// input is exhausted, at which point [`Ok(None)`] is returned. End of
/// input is a normal outcome, distinguishable from every error.
pub trait Source {
    /// The error produced when an alignment cannot be read.
    type Error;

    /// Reads the next alignment, or [`None`] when no more remain.
    fn read_alignment(&mut self) -> Result<Option<Alignment>, Self::Error>;
}

/// A sink for alignments.
pub trait Sink {
    /// The error produced when an alignment cannot be written.
    type Error;

    /// Writes one alignment.
    fn write_alignment(&mut self, alignment: &Alignment) -> Result<(), Self::Error>;
}
