//! An Arlequin file reader.

use std::io::BufRead;
use std::io::{self};

use crate::alignment;
use crate::alignment::Alignment;
use crate::alignment::Alignments;
use crate::alignment::alignments;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// An Arlequin file reader.
///
/// The reader wraps any line-oriented stream and exposes the alignments
/// contained within it through [`Reader::alignments()`]. The read cursor
/// only ever moves forward: each alignment is parsed in a single pass, and
/// no line is ever re-read.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates an Arlequin file reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=1\nh1 1 ACGT";
    /// let reader = arlequin::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// The trailing newline (and carriage return, if any) is stripped. The
    /// returned length is the number of bytes consumed from the stream, so
    /// zero signals end of input.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"[Profile]\r\nNbSamples=1";
    /// let mut reader = arlequin::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 11);
    /// assert_eq!(buffer, "[Profile]");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 11);
    /// assert_eq!(buffer, "NbSamples=1");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Returns an iterator over the alignments in the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=2\nh1 1 ACGT\nh2 1 ACGA";
    /// let mut reader = arlequin::Reader::new(&data[..]);
    ///
    /// let alignments = reader
    ///     .alignments()
    ///     .map(|result| result.unwrap())
    ///     .collect::<Vec<_>>();
    /// assert_eq!(alignments.len(), 1);
    /// assert_eq!(alignments[0].len(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn alignments(&mut self) -> Alignments<'_, T> {
        Alignments::new(self)
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

impl<T> alignment::Source for Reader<T>
where
    T: BufRead,
{
    type Error = alignments::Error;

    fn read_alignment(&mut self) -> Result<Option<Alignment>, Self::Error> {
        self.alignments().next().transpose()
    }
}

/// Reads a line from a buffered reader, stripping the line terminator.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
