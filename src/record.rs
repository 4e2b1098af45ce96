// src/record.rs
//
// In-memory shape of one scraped listing. Lives for a single run.

/// Ordered string → string map. Re-inserting a key keeps its first position
/// and replaces the value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Details {
    entries: Vec<(String, String)>,
}

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Details {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut d = Details::new();
        for (k, v) in iter {
            d.insert(k.into(), v.into());
        }
        d
    }
}

/// Result of reading a page: every field resolved except the image bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    pub name: String,
    pub price: String,
    pub details: Details,
    pub about_items: Vec<String>,
    /// As found in the markup; may be relative.
    pub image_url: Option<String>,
}

impl Extraction {
    pub fn into_record(self, image: Option<Vec<u8>>) -> ProductRecord {
        ProductRecord {
            name: self.name,
            price: self.price,
            details: self.details,
            about_items: self.about_items,
            image,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductRecord {
    /// Never empty (placeholder when the title is missing)
    pub name: String,
    /// Never empty (placeholder when the price is missing)
    pub price: String,
    pub details: Details,
    pub about_items: Vec<String>,
    /// Raw encoded image (JPEG/PNG/…), if one was fetched
    pub image: Option<Vec<u8>>,
}
