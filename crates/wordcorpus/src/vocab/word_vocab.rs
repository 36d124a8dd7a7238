//! # Word ``{ String <-> T }`` Vocabulary

use crate::{
    errors::{CorpusError, CorpusResult},
    record::Record,
    types::{TokenType, WCHashMap, WCHashSet, id_to_index, try_id_from_index},
    vocab::special_tokens::{EOS, Framing, PAD, SOS, SpecialTokens, UNK},
};

/// Induces a [`WordVocab`] from token sequences.
///
/// Ids are assigned in first-occurrence order, after the reserved
/// [`SpecialTokens`]; so the id of a corpus word is
/// ``specials.len() + (distinct words first seen before it)``.
#[derive(Debug, Clone)]
pub struct WordVocabBuilder {
    specials: SpecialTokens,
    seen: WCHashSet<String>,
    words: Vec<String>,
}

impl Default for WordVocabBuilder {
    fn default() -> Self {
        Self::new(SpecialTokens::default())
    }
}

impl WordVocabBuilder {
    /// Create a builder seeded with the given reserved tokens.
    pub fn new(specials: SpecialTokens) -> Self {
        let mut builder = Self {
            specials,
            seen: Default::default(),
            words: Vec::new(),
        };
        builder.observe(specials.words());
        builder
    }

    /// The reserved tokens this builder was seeded with.
    pub fn specials(&self) -> SpecialTokens {
        self.specials
    }

    /// The number of distinct words seen so far, reserved tokens included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; the reserved tokens are always present.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Observe a sequence of words.
    pub fn observe<I, S>(
        &mut self,
        words: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if !self.seen.contains(word) {
                self.seen.insert(word.to_string());
                self.words.push(word.to_string());
            }
        }
    }

    /// Observe the words of each record, in order.
    pub fn observe_records<'a, T, I>(
        &mut self,
        records: I,
    ) where
        T: TokenType,
        I: IntoIterator<Item = &'a Record<T>>,
    {
        for record in records {
            self.observe(record.words());
        }
    }

    /// Freeze the observed words into a [`WordVocab`].
    ///
    /// ## Returns
    /// `CorpusError::IdOverflow` if the vocabulary does not fit in `T`.
    pub fn build<T: TokenType>(self) -> CorpusResult<WordVocab<T>> {
        let mut word_to_id = WCHashMap::with_capacity(self.words.len());
        let mut id_to_word = WCHashMap::with_capacity(self.words.len());
        for (idx, word) in self.words.into_iter().enumerate() {
            let id: T = try_id_from_index(idx)?;
            word_to_id.insert(word.clone(), id);
            id_to_word.insert(id, word);
        }
        WordVocab::init(word_to_id, id_to_word)
    }
}

/// A frozen bidirectional ``{ word <-> id }`` vocabulary.
///
/// Words absent from the vocabulary resolve to ``<unk>``.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: TokenType> {
    word_to_id: WCHashMap<String, T>,
    id_to_word: WCHashMap<T, String>,
    unk: T,
}

impl<T: TokenType> WordVocab<T> {
    /// Induce a vocabulary from an ordered collection of word sequences.
    pub fn from_sequences<I, W, S>(
        specials: SpecialTokens,
        sequences: I,
    ) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = WordVocabBuilder::new(specials);
        for words in sequences {
            builder.observe(words);
        }
        builder.build()
    }

    /// Build a vocabulary from a supplied ``{ word -> id }`` mapping.
    ///
    /// The mapping must contain ``<unk>``, and ids must be unique.
    /// If a word repeats, the last entry wins.
    pub fn from_map<I, S>(map: I) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut word_to_id: WCHashMap<String, T> = WCHashMap::default();
        let mut id_to_word: WCHashMap<T, String> = WCHashMap::default();
        for (word, id) in map {
            let word: String = word.into();
            if let Some(prev) = id_to_word.get(&id)
                && prev != &word
            {
                return Err(CorpusError::DuplicateId {
                    id: id.to_u64().unwrap_or(u64::MAX),
                });
            }
            if let Some(old) = word_to_id.insert(word.clone(), id) {
                id_to_word.remove(&old);
            }
            id_to_word.insert(id, word);
        }
        Self::init(word_to_id, id_to_word)
    }

    fn init(
        word_to_id: WCHashMap<String, T>,
        id_to_word: WCHashMap<T, String>,
    ) -> CorpusResult<Self> {
        let unk = *word_to_id
            .get(UNK)
            .ok_or_else(|| CorpusError::MissingSpecialToken {
                token: UNK.to_string(),
            })?;
        Ok(Self {
            word_to_id,
            id_to_word,
            unk,
        })
    }

    /// The number of words in the vocabulary, reserved tokens included.
    pub fn len(&self) -> usize {
        self.word_to_id.len()
    }

    /// Check if the vocab is empty; never true for a valid vocabulary.
    pub fn is_empty(&self) -> bool {
        self.word_to_id.is_empty()
    }

    /// Get the ``{ word -> id }`` map.
    pub fn word_to_id(&self) -> &WCHashMap<String, T> {
        &self.word_to_id
    }

    /// Is the word in the vocabulary?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.word_to_id.contains_key(word)
    }

    /// Iterate over ``(id, word)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        let mut pairs: Vec<(T, &str)> = self
            .id_to_word
            .iter()
            .map(|(&id, word)| (id, word.as_str()))
            .collect();
        pairs.sort_by_key(|&(id, _)| id);
        pairs.into_iter()
    }

    /// The largest id in the vocabulary.
    pub fn max_id(&self) -> Option<T> {
        self.id_to_word.keys().max().copied()
    }

    /// Return the id for the word, if any.
    pub fn lookup_id(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_to_id.get(word).copied()
    }

    /// Return the word for the id, if any.
    pub fn lookup_word(
        &self,
        id: T,
    ) -> Option<&str> {
        self.id_to_word.get(&id).map(String::as_str)
    }

    /// The ``<unk>`` id.
    pub fn unk_id(&self) -> T {
        self.unk
    }

    /// The ``<pad>`` id.
    pub fn pad_id(&self) -> CorpusResult<T> {
        self.special_id(PAD)
    }

    /// Look up a reserved token, failing if it is absent.
    pub fn special_id(
        &self,
        token: &str,
    ) -> CorpusResult<T> {
        self.lookup_id(token)
            .ok_or_else(|| CorpusError::MissingSpecialToken {
                token: token.to_string(),
            })
    }

    /// Resolve a word; unknown words resolve to ``<unk>``.
    pub fn resolve(
        &self,
        word: &str,
    ) -> T {
        self.lookup_id(word).unwrap_or(self.unk)
    }

    /// Resolve every word of a sequence.
    pub fn resolve_all<I, S>(
        &self,
        words: I,
    ) -> Vec<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| self.resolve(w.as_ref()))
            .collect()
    }

    /// Resolve a sequence, framing it as requested.
    ///
    /// ## Returns
    /// `CorpusError::MissingSpecialToken` if framing needs ``<sos>``/``<eos>``
    /// and the vocabulary lacks them.
    pub fn encode<I, S>(
        &self,
        words: I,
        framing: Framing,
    ) -> CorpusResult<Vec<T>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match framing {
            Framing::Plain => Ok(self.resolve_all(words)),
            Framing::Tagged => {
                let sos = self.special_id(SOS)?;
                let eos = self.special_id(EOS)?;
                let mut ids = vec![sos];
                ids.extend(words.into_iter().map(|w| self.resolve(w.as_ref())));
                ids.push(eos);
                Ok(ids)
            }
        }
    }

    /// Map ids back to words; ids not in the vocabulary decode to ``<unk>``.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> Vec<&str> {
        ids.iter()
            .map(|&id| self.lookup_word(id).unwrap_or(UNK))
            .collect()
    }

    /// Is the id dense, i.e. ``0..len``?
    ///
    /// Induced vocabularies are always dense; supplied ones need not be.
    pub fn is_dense(&self) -> bool {
        self.id_to_word
            .keys()
            .all(|&id| id_to_index(id).is_some_and(|idx| idx < self.len()))
    }
}
