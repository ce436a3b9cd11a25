//! Watch-list of SSID fragments

use serde::{Deserialize, Serialize};

/// Ordered, lower-cased SSID fragments configured for an account.
/// Blank entries are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WatchList(Vec<String>);

impl WatchList {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            terms
                .into_iter()
                .map(|term| term.as_ref().trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for WatchList {
    fn from(terms: Vec<String>) -> Self {
        Self::new(terms)
    }
}

impl From<WatchList> for Vec<String> {
    fn from(list: WatchList) -> Self {
        list.0
    }
}
