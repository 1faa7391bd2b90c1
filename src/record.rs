//! An annotated sequence record within an alignment.

pub mod annotation;
pub mod haplotype;

use std::collections::BTreeMap;

pub use haplotype::Haplotype;

use crate::record::annotation::Value;

/// A sequence record within an alignment.
///
/// Each record corresponds to one haplotype line of the input: it carries
/// the haplotype identifier, its residue sequence, a free-text description
/// summarizing the frequency and sample, and an annotation mapping with at
/// least the [`sample`](annotation::SAMPLE_KEY) and
/// [`frequency`](annotation::FREQUENCY_KEY) keys.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The record identifier.
    id: String,

    /// The residue sequence.
    sequence: String,

    /// A free-text description of the record.
    description: String,

    /// The annotations attached to the record.
    annotations: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a new [`Record`] from a haplotype line and the name of the
    /// sample it was found in.
    pub(crate) fn from_haplotype(haplotype: Haplotype, sample: &str) -> Self {
        let (id, frequency, residues) = haplotype.into_parts();
        let description = format!("freq={frequency} sample={sample}");

        let mut annotations = BTreeMap::new();
        annotations.insert(
            annotation::SAMPLE_KEY.to_string(),
            Value::Text(sample.to_string()),
        );
        annotations.insert(
            annotation::FREQUENCY_KEY.to_string(),
            Value::Integer(frequency),
        );

        Self {
            id,
            sequence: residues,
            description,
            annotations,
        }
    }

    /// Returns the record identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=1\nh1 1 ACGT";
    /// let mut reader = arlequin::Reader::new(&data[..]);
    ///
    /// let alignment = reader.alignments().next().unwrap()?;
    /// let record = alignment.records().first().unwrap();
    ///
    /// assert_eq!(record.id(), "h1");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the residue sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Returns the free-text description of the record.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=1\nh1 1 ACGT";
    /// let mut reader = arlequin::Reader::new(&data[..]);
    ///
    /// let alignment = reader.alignments().next().unwrap()?;
    /// let record = alignment.records().first().unwrap();
    ///
    /// assert_eq!(record.description(), "freq=1 sample=Pop1");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the annotations attached to the record.
    pub fn annotations(&self) -> &BTreeMap<String, Value> {
        &self.annotations
    }

    /// Returns the name of the sample the record belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=1\nh1 1 ACGT";
    /// let mut reader = arlequin::Reader::new(&data[..]);
    ///
    /// let alignment = reader.alignments().next().unwrap()?;
    /// let record = alignment.records().first().unwrap();
    ///
    /// assert_eq!(record.sample(), Some("Pop1"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn sample(&self) -> Option<&str> {
        self.annotations.get(annotation::SAMPLE_KEY)?.as_text()
    }

    /// Returns the number of individuals carrying the record's haplotype.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=1\nh1 1 ACGT";
    /// let mut reader = arlequin::Reader::new(&data[..]);
    ///
    /// let alignment = reader.alignments().next().unwrap()?;
    /// let record = alignment.records().first().unwrap();
    ///
    /// assert_eq!(record.frequency(), Some(1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn frequency(&self) -> Option<u64> {
        self.annotations.get(annotation::FREQUENCY_KEY)?.as_integer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_from_haplotype() {
        let haplotype = "h1 2 ACGT".parse::<Haplotype>().unwrap();
        let record = Record::from_haplotype(haplotype, "Pop1");

        assert_eq!(record.id(), "h1");
        assert_eq!(record.sequence(), "ACGT");
        assert_eq!(record.description(), "freq=2 sample=Pop1");
        assert_eq!(record.sample(), Some("Pop1"));
        assert_eq!(record.frequency(), Some(2));
        assert_eq!(record.annotations().len(), 2);
    }
}
