//! # Label ``{ String <-> T }`` Vocabulary

use crate::{
    errors::{CorpusError, CorpusResult},
    types::{TokenType, WCHashMap, try_id_from_index},
};

/// A frozen bidirectional ``{ label <-> id }`` vocabulary.
///
/// Unlike [`crate::vocab::WordVocab`], there is no fallback label:
/// resolving an unseen label is an error.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelVocab<T: TokenType> {
    label_to_id: WCHashMap<String, T>,
    id_to_label: WCHashMap<T, String>,
}

impl<T: TokenType> Default for LabelVocab<T> {
    fn default() -> Self {
        Self {
            label_to_id: Default::default(),
            id_to_label: Default::default(),
        }
    }
}

impl<T: TokenType> LabelVocab<T> {
    /// Assign ids ``0, 1, 2, ...`` to labels in first-occurrence order.
    pub fn from_labels<I, S>(labels: I) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for label in labels {
            let label = label.as_ref();
            if vocab.label_to_id.contains_key(label) {
                continue;
            }
            let id: T = try_id_from_index(vocab.len())?;
            vocab.label_to_id.insert(label.to_string(), id);
            vocab.id_to_label.insert(id, label.to_string());
        }
        Ok(vocab)
    }

    /// Build a label vocabulary from a supplied ``{ label -> id }`` mapping.
    ///
    /// Ids must be unique.
    pub fn from_map<I, S>(map: I) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        for (label, id) in map {
            let label: String = label.into();
            if let Some(prev) = vocab.id_to_label.get(&id)
                && prev != &label
            {
                return Err(CorpusError::DuplicateId {
                    id: id.to_u64().unwrap_or(u64::MAX),
                });
            }
            if let Some(old) = vocab.label_to_id.insert(label.clone(), id) {
                vocab.id_to_label.remove(&old);
            }
            vocab.id_to_label.insert(id, label);
        }
        Ok(vocab)
    }

    /// The number of labels.
    pub fn len(&self) -> usize {
        self.label_to_id.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.label_to_id.is_empty()
    }

    /// Get the ``{ label -> id }`` map.
    pub fn label_to_id(&self) -> &WCHashMap<String, T> {
        &self.label_to_id
    }

    /// Iterate over ``(id, label)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        let mut pairs: Vec<(T, &str)> = self
            .id_to_label
            .iter()
            .map(|(&id, label)| (id, label.as_str()))
            .collect();
        pairs.sort_by_key(|&(id, _)| id);
        pairs.into_iter()
    }

    /// Return the id for the label, if any.
    pub fn lookup_id(
        &self,
        label: &str,
    ) -> Option<T> {
        self.label_to_id.get(label).copied()
    }

    /// Return the id for the label, failing with `UnknownLabel`.
    pub fn try_id(
        &self,
        label: &str,
    ) -> CorpusResult<T> {
        self.lookup_id(label)
            .ok_or_else(|| CorpusError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Return the label for the id, if any.
    pub fn lookup_label(
        &self,
        id: T,
    ) -> Option<&str> {
        self.id_to_label.get(&id).map(String::as_str)
    }
}
