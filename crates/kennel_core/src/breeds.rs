use std::collections::{BTreeMap, BTreeSet};

/// One guess produced by the image-recognition model.
///
/// `class_name` is free text: possibly several comma-separated fragments,
/// each of them possibly several space/hyphen-separated words, mixed case.
/// The list a model returns is not guaranteed to be sorted by probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub class_name: String,
    pub probability: f64,
}

/// A resolved breed match.
///
/// `confidence` is the probability of the winning classification, copied
/// verbatim. `breed` is always a key of the taxonomy that produced the
/// probe; `sub_breed`, when present, is always a member of that breed's
/// sub-breed set.
#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
    pub confidence: f64,
    pub breed: String,
    pub sub_breed: Option<String>,
}

/// Two-level breed taxonomy: breed name to its set of known sub-breeds.
///
/// Keys and members are lowercase and non-empty. Built once from the
/// remote listing and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Breeds {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl Breeds {
    /// Builds the taxonomy from (breed, sub-breeds) pairs.
    ///
    /// Names are lowercased on the way in; empty names are dropped so the
    /// lowercase/non-empty invariant holds no matter the source.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter(|(breed, _)| !breed.as_ref().is_empty())
            .map(|(breed, sub_breeds)| {
                let sub_breeds = sub_breeds
                    .iter()
                    .filter(|name| !name.as_ref().is_empty())
                    .map(|name| name.as_ref().to_lowercase())
                    .collect();
                (breed.as_ref().to_lowercase(), sub_breeds)
            })
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if `breed` (already lowercase) is a known breed key.
    pub fn contains(&self, breed: &str) -> bool {
        self.entries.contains_key(breed)
    }

    /// Resolves ranked model output to a single breed match.
    ///
    /// Guesses are ranked by probability descending, then scanned in that
    /// order; the first one that resolves against the taxonomy wins, even
    /// if a lower-ranked guess would carry a sub-breed. No resolution
    /// anywhere means no match, which is a normal absent result rather
    /// than an error.
    pub fn classify(&self, classifications: &[Classification]) -> Option<Probe> {
        let mut ranked = classifications.to_vec();
        ranked.sort_by(|left, right| right.probability.total_cmp(&left.probability));

        ranked
            .iter()
            .find_map(|guess| self.classify_single(guess.probability, &guess.class_name))
    }

    /// Splits a class name into comma-separated fragments and takes the
    /// first fragment that resolves.
    fn classify_single(&self, confidence: f64, class_name: &str) -> Option<Probe> {
        class_name
            .to_lowercase()
            .split(',')
            .map(str::trim_start)
            .find_map(|fragment| self.classify_fragment(confidence, fragment))
    }

    /// Resolves one fragment against the taxonomy.
    ///
    /// The first word that is a breed key fixes the breed; then the whole
    /// fragment is scanned again for the first word that is a member of
    /// that breed's sub-breed set. Breed and sub-breed words may appear
    /// in either order and need not be adjacent.
    fn classify_fragment(&self, confidence: f64, fragment: &str) -> Option<Probe> {
        let names: Vec<&str> = fragment
            .split(|ch: char| ch.is_whitespace() || ch == '-')
            .filter(|name| !name.is_empty())
            .collect();

        let (breed, sub_breeds) = names
            .iter()
            .find_map(|name| self.entries.get_key_value(*name))?;

        let sub_breed = names
            .iter()
            .find(|name| sub_breeds.contains(**name))
            .map(|name| (*name).to_string());

        Some(Probe {
            confidence,
            breed: breed.clone(),
            sub_breed,
        })
    }
}
