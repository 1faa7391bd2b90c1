//! `arlequin` is a crate for reading files in the Arlequin population
//! genetics exchange format.
//!
//! An Arlequin file is a line-oriented text format in which a `[Profile]`
//! section declares dataset-wide metadata (the data type, the symbol used
//! for missing data, and the number of samples), and a `[Data]` section
//! holds the samples themselves. Each sample names a population, declares
//! how many individuals it contains, and lists its haplotypes one per
//! line: an identifier, the number of individuals carrying the haplotype,
//! and the residue sequence. A `#` introduces a trailing comment on any
//! line.
//!
//! The [`Reader`] turns each profile/data pair into one [`Alignment`]: an
//! ordered collection of [`Record`]s, one per haplotype line, each
//! annotated with the sample it belongs to and its frequency. Only haploid
//! DNA data is supported; files declaring any other data type are
//! rejected.
//!
//! ```
//! use arlequin as arp;
//!
//! let data = b"[Profile]\n\
//! DataType=DNA\n\
//! NbSamples=1\n\
//! MissingData='?'\n\
//! [Data]\n\
//! SampleName=\"Pop1\"\n\
//! SampleSize=2\n\
//! h1 1 ACGT\n\
//! h2 1 AC?A";
//!
//! let mut reader = arp::Reader::new(&data[..]);
//!
//! for result in reader.alignments() {
//!     let alignment = result?;
//!
//!     for record in alignment.records() {
//!         println!(
//!             "{} ({}): {}",
//!             record.id(),
//!             record.description(),
//!             record.sequence()
//!         );
//!     }
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Writing Arlequin files is intentionally not implemented: the
//! [`Writer`] exists for symmetry with the read path and fails every
//! write.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod alignment;
pub mod alphabet;
pub mod line;
pub mod profile;
pub mod reader;
pub mod record;
pub mod sample;
pub mod writer;

pub use alignment::Alignment;
pub use reader::Reader;
pub use record::Record;
pub use writer::Writer;
