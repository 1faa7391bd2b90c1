//! Residue alphabets for haplotype data.

/// The nucleotide symbols recognized in a DNA haplotype, including the
/// IUPAC ambiguity codes.
pub const DNA_RESIDUES: &str = "ACGTURYSWKMBDHVN";

/// The symbol for an alignment gap.
pub const GAP: char = '-';

/// An alphabet that haplotype residues are validated against.
///
/// Arlequin files may declare a symbol for missing data in their profile
/// section; once folded in, that symbol is accepted alongside the DNA
/// residues and the gap symbol.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Alphabet {
    /// The missing data symbol, if one was declared.
    missing: Option<char>,
}

impl Alphabet {
    /// Creates a DNA alphabet with no missing data symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use arlequin::alphabet::Alphabet;
    ///
    /// let alphabet = Alphabet::dna();
    /// assert_eq!(alphabet.missing(), None);
    /// ```
    pub fn dna() -> Self {
        Self::default()
    }

    /// Consumes `self` and returns the alphabet with a missing data symbol
    /// folded in.
    ///
    /// # Examples
    ///
    /// ```
    /// use arlequin::alphabet::Alphabet;
    ///
    /// let alphabet = Alphabet::dna().with_missing('?');
    /// assert_eq!(alphabet.missing(), Some('?'));
    /// assert!(alphabet.contains('?'));
    /// ```
    pub fn with_missing(self, symbol: char) -> Self {
        Self {
            missing: Some(symbol),
        }
    }

    /// Returns the missing data symbol, if one was declared.
    pub fn missing(&self) -> Option<char> {
        self.missing
    }

    /// Returns whether the alphabet contains the given symbol.
    ///
    /// Nucleotide symbols are matched case-insensitively; the gap symbol
    /// and the missing data symbol (if any) are matched exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use arlequin::alphabet::Alphabet;
    ///
    /// let alphabet = Alphabet::dna();
    ///
    /// assert!(alphabet.contains('A'));
    /// assert!(alphabet.contains('t'));
    /// assert!(alphabet.contains('-'));
    /// assert!(!alphabet.contains('?'));
    /// ```
    pub fn contains(&self, symbol: char) -> bool {
        DNA_RESIDUES.contains(symbol.to_ascii_uppercase())
            || symbol == GAP
            || self.missing == Some(symbol)
    }

    /// Returns the first symbol within the residues that is not contained
    /// in the alphabet, if any.
    pub fn find_invalid(&self, residues: &str) -> Option<char> {
        residues.chars().find(|symbol| !self.contains(*symbol))
    }
}
