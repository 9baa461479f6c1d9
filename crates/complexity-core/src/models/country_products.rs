use serde::{Deserialize, Serialize};

/// One country and the products it exports, as supplied by a data-entry source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    #[serde(default)]
    pub products: Vec<String>,
}

/// Insertion-ordered country → product-list mapping.
///
/// Re-inserting a country replaces its products but keeps the position it
/// was first inserted at. Serializes as a list of [`CountryEntry`] so the
/// order survives JSON and TOML round trips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CountryEntry>", into = "Vec<CountryEntry>")]
pub struct CountryProducts {
    entries: Vec<CountryEntry>,
}

impl CountryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a country's product list.
    pub fn insert(&mut self, country: impl Into<String>, products: Vec<String>) {
        let name = country.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.products = products,
            None => self.entries.push(CountryEntry { name, products }),
        }
    }

    pub fn get(&self, country: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.name == country)
            .map(|e| e.products.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Countries in insertion order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.products.as_slice()))
    }

    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }
}

impl<C, P> FromIterator<(C, Vec<P>)> for CountryProducts
where
    C: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, Vec<P>)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (country, products) in iter {
            mapping.insert(country, products.into_iter().map(Into::into).collect());
        }
        mapping
    }
}

impl From<Vec<CountryEntry>> for CountryProducts {
    fn from(entries: Vec<CountryEntry>) -> Self {
        entries
            .into_iter()
            .map(|e| (e.name, e.products))
            .collect()
    }
}

impl From<CountryProducts> for Vec<CountryEntry> {
    fn from(mapping: CountryProducts) -> Self {
        mapping.entries
    }
}
