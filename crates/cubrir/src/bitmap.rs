//! Executed-Line Bitmap
//!
//! One bit per source line, packed into `u64` words. The bitmap only ever
//! grows: a bit, once set, stays set until the whole record is discarded.
//! Growth doubles the word count (amortized O(1)) and zero-fills the new
//! high region, so recorded history survives every resize intact.

/// Width of one storage word in bits.
const WORD_BITS: u32 = u64::BITS;

/// Per-file executed-line bitmap.
///
/// Logically unbounded in the `u32` line range; physically sized in whole
/// words. Out-of-range queries answer `false` rather than failing, because a
/// line never recorded is simply "not covered".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBitmap {
    /// Packed bits, line `n` lives at `words[n / 64]`, bit `n % 64`.
    words: Vec<u64>,
}

impl LineBitmap {
    /// Create an empty bitmap with no storage allocated.
    #[must_use]
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Create a bitmap pre-sized to hold `lines` line numbers without growing.
    #[must_use]
    pub fn with_capacity_lines(lines: u32) -> Self {
        let words = if lines == 0 {
            0
        } else {
            Self::words_for(lines - 1)
        };
        Self {
            words: vec![0; words],
        }
    }

    /// Number of words needed so that `line` is addressable.
    fn words_for(line: u32) -> usize {
        (line / WORD_BITS) as usize + 1
    }

    /// Mark `line` as executed, growing storage first if needed.
    ///
    /// Setting an already-set bit is a no-op. Growth never loses, shifts, or
    /// reorders previously-set bits.
    #[inline]
    pub fn set(&mut self, line: u32) {
        let word = (line / WORD_BITS) as usize;
        if word >= self.words.len() {
            self.grow_for(line);
        }
        self.words[word] |= 1u64 << (line % WORD_BITS);
    }

    /// Check whether `line` has been recorded. Lines beyond current capacity
    /// are reported as not covered.
    #[inline]
    #[must_use]
    pub fn is_set(&self, line: u32) -> bool {
        let word = (line / WORD_BITS) as usize;
        self.words
            .get(word)
            .is_some_and(|&w| w & (1u64 << (line % WORD_BITS)) != 0)
    }

    /// Grow so that `line` fits: at least double the current word count, and
    /// at least enough words to address `line`.
    fn grow_for(&mut self, line: u32) {
        let needed = Self::words_for(line);
        let new_len = needed.max(self.words.len() * 2);
        self.words.resize(new_len, 0);
    }

    /// Enumerate every recorded line exactly once, lowest to highest.
    ///
    /// The iterator is lazy and the sequence is restartable: each call
    /// produces a fresh traversal over the current contents.
    pub fn iter_set_lines(&self) -> impl Iterator<Item = u32> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter(|&(_, &word)| word != 0)
            .flat_map(|(idx, &word)| {
                (0..WORD_BITS)
                    .filter(move |bit| word & (1u64 << bit) != 0)
                    .map(move |bit| idx as u32 * WORD_BITS + bit)
            })
    }

    /// Number of distinct lines recorded.
    #[must_use]
    pub fn count_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Current capacity in representable line numbers (a multiple of the
    /// word width). Never shrinks.
    #[must_use]
    pub fn capacity_lines(&self) -> usize {
        self.words.len() * WORD_BITS as usize
    }

    /// Bytes of bit storage currently allocated, for memory diagnostics.
    #[must_use]
    pub fn storage_bytes(&self) -> usize {
        self.words.capacity() * std::mem::size_of::<u64>()
    }
}
