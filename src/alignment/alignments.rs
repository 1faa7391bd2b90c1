//! An iterator over the [`Alignment`]s in an Arlequin file.

use std::io::BufRead;

use tracing::warn;

use crate::Reader;
use crate::alignment::Alignment;
use crate::alphabet::Alphabet;
use crate::line;
use crate::profile;
use crate::profile::Profile;
use crate::record::Haplotype;
use crate::record::Record;
use crate::sample;
use crate::sample::Sample;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to [`Alignments`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error while reading from the underlying stream.
    Io(std::io::Error),

    /// An error parsing the profile section.
    Profile(profile::ParseError),

    /// An error parsing a sample block.
    Sample(sample::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Profile(err) => write!(f, "profile error: {err}"),
            Error::Sample(err) => write!(f, "sample error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Alignments
////////////////////////////////////////////////////////////////////////////////////////

/// An iterator over the alignments in an Arlequin file.
///
/// Each call to [`next`](Iterator::next) advances the underlying reader to
/// the next `[Profile]` marker, interprets the profile section, walks the
/// declared number of sample blocks, and yields one [`Alignment`] holding
/// a record for every haplotype line encountered. Exhausting the stream
/// while seeking a profile marker ends the iteration; it is never an
/// error.
///
/// The iterator holds an exclusive borrow of its [`Reader`], so one parse
/// session owns the read cursor for its entire duration.
#[derive(Debug)]
pub struct Alignments<'a, T>
where
    T: BufRead,
{
    /// The inner reader.
    reader: &'a mut Reader<T>,

    /// The line buffer.
    buffer: String,
}

impl<'a, T> Alignments<'a, T>
where
    T: BufRead,
{
    /// Creates a new [`Alignments`].
    pub(crate) fn new(reader: &'a mut Reader<T>) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// Reads the next line into the buffer. Returns `false` at end of
    /// input.
    fn next_line(&mut self) -> Result<bool> {
        let read = self
            .reader
            .read_line_raw(&mut self.buffer)
            .map_err(Error::Io)?;

        Ok(read > 0)
    }

    /// Advances the stream to the profile marker.
    ///
    /// Returns `false` when the stream is exhausted before a marker
    /// appears, which signals that no more alignments remain.
    fn seek_profile(&mut self) -> Result<bool> {
        loop {
            if !self.next_line()? {
                return Ok(false);
            }

            if line::clean(&self.buffer).contains(profile::PROFILE_MARKER) {
                return Ok(true);
            }
        }
    }

    /// Reads the profile section up to the data marker.
    fn read_profile(&mut self) -> Result<Profile> {
        let mut alphabet = Alphabet::dna();
        let mut nb_samples = None;

        loop {
            if !self.next_line()? {
                return Err(Error::Profile(profile::ParseError::MissingDataSection));
            }

            let cleaned = line::clean(&self.buffer);

            if cleaned.contains(profile::DATA_MARKER) {
                break;
            }

            if cleaned.contains(profile::DATA_TYPE_KEY) {
                let data_type = line::value(cleaned).ok_or_else(|| {
                    Error::Profile(profile::ParseError::MissingValue(cleaned.to_string()))
                })?;

                if data_type != profile::SUPPORTED_DATA_TYPE {
                    return Err(Error::Profile(profile::ParseError::UnsupportedDataType(
                        data_type.to_string(),
                    )));
                }
            } else if cleaned.contains(profile::MISSING_DATA_KEY) {
                let symbol = line::value(cleaned).ok_or_else(|| {
                    Error::Profile(profile::ParseError::MissingValue(cleaned.to_string()))
                })?;

                if let Some(symbol) = symbol.chars().next() {
                    alphabet = alphabet.with_missing(symbol);
                }
            } else if cleaned.contains(profile::NB_SAMPLES_KEY) {
                let count = line::value(cleaned).ok_or_else(|| {
                    Error::Profile(profile::ParseError::MissingValue(cleaned.to_string()))
                })?;

                let count = count.parse::<usize>().map_err(|err| {
                    Error::Profile(profile::ParseError::InvalidSampleCount(
                        err,
                        cleaned.to_string(),
                    ))
                })?;

                nb_samples = Some(count);
            }
        }

        match nb_samples {
            Some(nb_samples) => Ok(Profile::new(alphabet, nb_samples)),
            None => Err(Error::Profile(profile::ParseError::MissingSampleCount)),
        }
    }

    /// Reads one sample block.
    fn read_sample(&mut self, alphabet: &Alphabet) -> Result<Sample> {
        // (1) Locate the sample name.
        let name = loop {
            if !self.next_line()? {
                return Err(Error::Sample(sample::ParseError::MissingSampleName));
            }

            let cleaned = line::clean(&self.buffer);

            if cleaned.contains(sample::SAMPLE_NAME_KEY) {
                break line::value(cleaned)
                    .ok_or_else(|| {
                        Error::Sample(sample::ParseError::MissingValue(cleaned.to_string()))
                    })?
                    .to_string();
            }
        };

        // (2) The declared sample size sits on the next cleaned line.
        if !self.next_line()? {
            return Err(Error::Sample(sample::ParseError::AbruptEndInSample(name)));
        }

        let cleaned = line::clean(&self.buffer);
        let size = line::value(cleaned)
            .ok_or_else(|| Error::Sample(sample::ParseError::MissingValue(cleaned.to_string())))?;
        let size = size.parse::<u64>().map_err(|err| {
            Error::Sample(sample::ParseError::InvalidSampleSize(
                err,
                cleaned.to_string(),
            ))
        })?;

        // (3) Read haplotype lines until their frequencies account for the
        // declared sample size.
        let mut haplotypes = Vec::new();
        let mut observed = 0u64;

        while observed < size {
            if !self.next_line()? {
                return Err(Error::Sample(sample::ParseError::AbruptEndInSample(
                    name.clone(),
                )));
            }

            let cleaned = line::clean(&self.buffer);

            // Blank lines and the block opener are not haplotypes.
            if cleaned.is_empty() || cleaned.contains(sample::SAMPLE_DATA_KEY) {
                continue;
            }

            let haplotype = cleaned.parse::<Haplotype>().map_err(|err| {
                Error::Sample(sample::ParseError::InvalidHaplotype(
                    err,
                    cleaned.to_string(),
                ))
            })?;

            if let Some(symbol) = alphabet.find_invalid(haplotype.residues()) {
                return Err(Error::Sample(sample::ParseError::InvalidResidue(
                    symbol,
                    haplotype.id().to_string(),
                )));
            }

            observed += haplotype.frequency();
            haplotypes.push(haplotype);
        }

        if observed != size {
            warn!(
                "sample \"{}\": haplotype frequencies sum to {}, but the declared sample size \
                 is {}",
                name, observed, size
            );
        }

        Ok(Sample::new(name, size, haplotypes))
    }
}

impl<T> Iterator for Alignments<'_, T>
where
    T: BufRead,
{
    type Item = Result<Alignment>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.seek_profile() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => return Some(Err(err)),
        }

        let profile = match self.read_profile() {
            Ok(profile) => profile,
            Err(err) => return Some(Err(err)),
        };

        let mut alignment = Alignment::new(profile.alphabet().clone());

        for _ in 0..profile.nb_samples() {
            let sample = match self.read_sample(profile.alphabet()) {
                Ok(sample) => sample,
                Err(err) => return Some(Err(err)),
            };

            let (name, _, haplotypes) = sample.into_parts();

            for haplotype in haplotypes {
                alignment.push(Record::from_haplotype(haplotype, &name));
            }
        }

        Some(Ok(alignment))
    }
}

#[cfg(test)]
mod tests {
    use crate::Reader;

    /// A well-formed, single-profile file with two samples, in the shape
    /// produced by the Arlequin program itself.
    const TWO_SAMPLES: &str = "# A comment before the profile.\n\
                               [Profile]\n\
                               Title=\"Two populations\"\n\
                               NbSamples=2\n\
                               DataType=DNA\n\
                               GenotypicData=0\n\
                               MissingData='?'\n\
                               \n\
                               [Data]\n\
                               [[Samples]]\n\
                               SampleName=\"Pop1\"\n\
                               SampleSize=3\n\
                               SampleData= {\n\
                               h1 2 ACGT\n\
                               h2 1 ACGA\n\
                               }\n\
                               SampleName=\"Pop2\"\n\
                               SampleSize=2\n\
                               SampleData= {\n\
                               h3 2 AC?T\n\
                               }\n";

    #[test]
    fn two_samples() {
        let mut reader = Reader::new(TWO_SAMPLES.as_bytes());
        let alignment = reader.alignments().next().unwrap().unwrap();

        // One record per haplotype line, not one per individual.
        assert_eq!(alignment.len(), 3);
        assert_eq!(alignment.alphabet().missing(), Some('?'));

        let records = alignment.records();

        assert_eq!(records[0].id(), "h1");
        assert_eq!(records[0].sample(), Some("Pop1"));
        assert_eq!(records[0].frequency(), Some(2));

        assert_eq!(records[1].id(), "h2");
        assert_eq!(records[1].sample(), Some("Pop1"));
        assert_eq!(records[1].frequency(), Some(1));

        assert_eq!(records[2].id(), "h3");
        assert_eq!(records[2].sequence(), "AC?T");
        assert_eq!(records[2].sample(), Some("Pop2"));
        assert_eq!(records[2].frequency(), Some(2));
    }

    #[test]
    fn concrete_single_sample_scenario() {
        let data =
            "[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=2\nh1 1 ACGT\nh2 1 ACGA";
        let mut reader = Reader::new(data.as_bytes());

        let alignment = reader.alignments().next().unwrap().unwrap();

        assert_eq!(alignment.len(), 2);

        let records = alignment.records();
        assert_eq!(records[0].id(), "h1");
        assert_eq!(records[0].sequence(), "ACGT");
        assert_eq!(records[0].frequency(), Some(1));
        assert_eq!(records[0].sample(), Some("Pop1"));
        assert_eq!(records[1].id(), "h2");
        assert_eq!(records[1].sequence(), "ACGA");
        assert_eq!(records[1].frequency(), Some(1));
        assert_eq!(records[1].sample(), Some("Pop1"));
    }

    #[test]
    fn no_profile_marker_signals_end_of_input() {
        let data = "just some text\nwith no profile marker\n";
        let mut reader = Reader::new(data.as_bytes());

        assert!(reader.alignments().next().is_none());
    }

    #[test]
    fn empty_input_signals_end_of_input() {
        let mut reader = Reader::new(&b""[..]);

        assert!(reader.alignments().next().is_none());
    }

    #[test]
    fn unsupported_data_type() {
        let data = "[Profile]\nDataType=\"RFLP\"\nNbSamples=1\n[Data]\n";
        let mut reader = Reader::new(data.as_bytes());

        let err = reader.alignments().next().unwrap().unwrap_err();

        assert_eq!(
            err.to_string(),
            "profile error: unsupported data type: expected \"DNA\" data, found \"RFLP\""
        );
    }

    #[test]
    fn invalid_sample_count() {
        let data = "[Profile]\nDataType=DNA\nNbSamples=\"abc\"\n[Data]\n";
        let mut reader = Reader::new(data.as_bytes());

        let err = reader.alignments().next().unwrap().unwrap_err();

        assert_eq!(
            err.to_string(),
            "profile error: invalid sample count: invalid digit found in \
             string\n\nline: NbSamples=\"abc\""
        );
    }

    #[test]
    fn missing_data_section() {
        let data = "[Profile]\nDataType=DNA\nNbSamples=1\n";
        let mut reader = Reader::new(data.as_bytes());

        let err = reader.alignments().next().unwrap().unwrap_err();

        assert_eq!(
            err.to_string(),
            "profile error: the file ended before the start of the data section"
        );
    }

    #[test]
    fn missing_sample_count() {
        let data = "[Profile]\nDataType=DNA\n[Data]\n";
        let mut reader = Reader::new(data.as_bytes());

        let err = reader.alignments().next().unwrap().unwrap_err();

        assert_eq!(
            err.to_string(),
            "profile error: the profile did not declare the number of samples"
        );
    }

    #[test]
    fn haplotype_line_with_two_fields() {
        let data = "[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=2\nh1 2\n";
        let mut reader = Reader::new(data.as_bytes());

        let err = reader.alignments().next().unwrap().unwrap_err();

        assert_eq!(
            err.to_string(),
            "sample error: invalid haplotype line: invalid number of fields in haplotype line: \
             expected 3 fields, found 2 fields\n\nline: h1 2"
        );
    }

    #[test]
    fn haplotype_with_zero_frequency() {
        let data = "[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=1\nh1 0 ACGT\n";
        let mut reader = Reader::new(data.as_bytes());

        let err = reader.alignments().next().unwrap().unwrap_err();

        assert_eq!(
            err.to_string(),
            "sample error: invalid haplotype line: invalid frequency: expected a positive number \
             of individuals, found zero\n\nline: h1 0 ACGT"
        );
    }

    #[test]
    fn haplotype_with_invalid_residue() {
        let data = "[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=1\nh1 1 AC!T\n";
        let mut reader = Reader::new(data.as_bytes());

        let err = reader.alignments().next().unwrap().unwrap_err();

        assert_eq!(
            err.to_string(),
            "sample error: invalid residue in haplotype \"h1\": \"!\" is not in the alphabet"
        );
    }

    #[test]
    fn abrupt_end_in_sample() {
        let data = "[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=3\nh1 1 ACGT\n";
        let mut reader = Reader::new(data.as_bytes());

        let err = reader.alignments().next().unwrap().unwrap_err();

        assert_eq!(
            err.to_string(),
            "sample error: the file ended in the middle of sample \"Pop1\""
        );
    }

    #[test]
    fn missing_second_sample() {
        let data = "[Profile]\nNbSamples=2\n[Data]\nSampleName=\"Pop1\"\nSampleSize=1\nh1 1 ACGT\n";
        let mut reader = Reader::new(data.as_bytes());

        let err = reader.alignments().next().unwrap().unwrap_err();

        assert_eq!(
            err.to_string(),
            "sample error: the file ended before the next sample name"
        );
    }

    #[test]
    fn frequency_overshoot_still_ends_the_block() {
        // The declared size is 3, but the single haplotype accounts for 4
        // individuals. The block ends regardless.
        let data = "[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=3\nh1 4 ACGT\n";
        let mut reader = Reader::new(data.as_bytes());

        let alignment = reader.alignments().next().unwrap().unwrap();

        assert_eq!(alignment.len(), 1);
        assert_eq!(alignment.records()[0].frequency(), Some(4));
    }

    #[test]
    fn comments_are_stripped_before_interpretation() {
        let data = "ignored # [Profile]\nignored # NbSamples=1\nignored # [Data]\n\
                    ignored # SampleName=\"Pop1\"\nignored # SampleSize=1\nignored # h1 1 ACGT\n";
        let mut reader = Reader::new(data.as_bytes());

        let alignment = reader.alignments().next().unwrap().unwrap();

        assert_eq!(alignment.len(), 1);
        assert_eq!(alignment.records()[0].id(), "h1");
    }

    #[test]
    fn multiple_profiles_in_one_stream() {
        let data = "[Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop1\"\nSampleSize=1\nh1 1 ACGT\n\
                    [Profile]\nNbSamples=1\n[Data]\nSampleName=\"Pop2\"\nSampleSize=1\nh2 1 ACGA\n";
        let mut reader = Reader::new(data.as_bytes());

        let alignments = reader
            .alignments()
            .map(|result| result.unwrap())
            .collect::<Vec<_>>();

        assert_eq!(alignments.len(), 2);
        assert_eq!(alignments[0].records()[0].sample(), Some("Pop1"));
        assert_eq!(alignments[1].records()[0].sample(), Some("Pop2"));
    }

    #[test]
    fn parsing_is_idempotent_across_fresh_sessions() {
        let first = Reader::new(TWO_SAMPLES.as_bytes())
            .alignments()
            .next()
            .unwrap()
            .unwrap();
        let second = Reader::new(TWO_SAMPLES.as_bytes())
            .alignments()
            .next()
            .unwrap()
            .unwrap();

        assert_eq!(first, second);
    }
}
