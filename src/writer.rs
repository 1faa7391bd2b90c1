//! An Arlequin file writer.

use std::io::Write;

use crate::alignment;
use crate::alignment::Alignment;

/// An error related to a [`Writer`].
#[derive(Debug)]
pub enum Error {
    /// Writing Arlequin files is not supported.
    Unsupported,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Unsupported => write!(f, "writing Arlequin files is not supported"),
        }
    }
}

impl std::error::Error for Error {}

/// An Arlequin file writer.
///
/// This type exists for symmetry with [`Reader`](crate::Reader): it
/// accepts alignments through the [`Sink`](alignment::Sink) contract, but
/// no output format is currently produced and every write fails with
/// [`Error::Unsupported`].
#[derive(Clone, Debug)]
pub struct Writer<T>(T)
where
    T: Write;

impl<T> Writer<T>
where
    T: Write,
{
    /// Creates an Arlequin file writer.
    ///
    /// # Examples
    ///
    /// ```
    /// let buffer = Vec::new();
    /// let writer = arlequin::Writer::new(buffer);
    /// ```
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Gets a reference to the inner writer.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Consumes self and returns the inner writer.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Writes one alignment.
    ///
    /// Currently always fails with [`Error::Unsupported`].
    pub fn write_alignment(&mut self, _alignment: &Alignment) -> Result<(), Error> {
        Err(Error::Unsupported)
    }
}

impl<T> alignment::Sink for Writer<T>
where
    T: Write,
{
    type Error = Error;

    fn write_alignment(&mut self, alignment: &Alignment) -> Result<(), Self::Error> {
        Writer::write_alignment(self, alignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reader;

    #[test]
    fn writing_is_unsupported() {
        let data = b"[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=1\nh1 1 ACGT";
        let mut reader = Reader::new(&data[..]);
        let alignment = reader.alignments().next().unwrap().unwrap();

        let mut writer = Writer::new(Vec::new());
        let err = writer.write_alignment(&alignment).unwrap_err();

        assert_eq!(err.to_string(), "writing Arlequin files is not supported");
        assert!(writer.into_inner().is_empty());
    }
}
