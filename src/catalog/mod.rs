//! In-memory café catalog
//!
//! The catalog maps a city name to the ordered list of cafés in that city.
//! It is built once at startup and only read afterwards.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Separator used when rendering café lists, so it may not appear in names.
pub const NAME_SEPARATOR: &str = ",";

/// Immutable city → cafés mapping
#[derive(Debug, Clone)]
pub struct CafeCatalog {
    cities: HashMap<String, Vec<String>>,
}

impl CafeCatalog {
    /// Build a catalog from an explicit mapping, rejecting data that the
    /// comma-separated response format cannot represent.
    pub fn new<I, C, N>(cities: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, Vec<N>)>,
        C: Into<String>,
        N: Into<String>,
    {
        let mut map = HashMap::new();

        for (city, cafes) in cities {
            let city = city.into();
            if city.trim().is_empty() {
                return Err(Error::invalid_catalog("city name must not be empty"));
            }

            let cafes: Vec<String> = cafes.into_iter().map(Into::into).collect();
            for cafe in &cafes {
                if cafe.trim().is_empty() {
                    return Err(Error::invalid_catalog(format!(
                        "city '{}' contains an empty cafe name",
                        city
                    )));
                }
                if cafe.contains(NAME_SEPARATOR) {
                    return Err(Error::invalid_catalog(format!(
                        "cafe name '{}' in city '{}' contains '{}'",
                        cafe, city, NAME_SEPARATOR
                    )));
                }
            }

            map.insert(city, cafes);
        }

        if map.is_empty() {
            return Err(Error::invalid_catalog("catalog must contain at least one city"));
        }

        Ok(Self { cities: map })
    }

    /// Cafés of `city` in catalog order, or `None` for an unknown city.
    pub fn cafes(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    /// Number of cities
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City names, sorted
    pub fn cities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for CafeCatalog {
    /// The built-in dataset served when configuration supplies none.
    fn default() -> Self {
        let cities = HashMap::from([
            (
                "moscow".to_string(),
                vec![
                    "Мир кофе".to_string(),
                    "Сладкоежка".to_string(),
                    "Горячий кофе".to_string(),
                    "Сытый студент".to_string(),
                    "Ложка и вилка".to_string(),
                ],
            ),
            (
                "tula".to_string(),
                vec![
                    "Тульский пряник".to_string(),
                    "Самовар".to_string(),
                    "Оружейная".to_string(),
                ],
            ),
        ]);

        Self { cities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = CafeCatalog::default();

        assert_eq!(catalog.cities(), vec!["moscow", "tula"]);
        assert_eq!(catalog.cafes("moscow").unwrap().len(), 5);
        assert_eq!(catalog.cafes("tula").unwrap()[0], "Тульский пряник");
        assert!(catalog.cafes("omsk").is_none());
    }

    #[test]
    fn test_city_lookup_is_case_sensitive() {
        let catalog = CafeCatalog::default();

        assert!(catalog.cafes("moscow").is_some());
        assert!(catalog.cafes("Moscow").is_none());
    }

    #[test]
    fn test_new_preserves_order() {
        let catalog = CafeCatalog::new([("kazan", vec!["B", "A", "C"])]).unwrap();

        assert_eq!(catalog.cafes("kazan").unwrap(), ["B", "A", "C"]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_new_rejects_separator_in_name() {
        let err = CafeCatalog::new([("kazan", vec!["Чай, кофе"])]).unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
    }

    #[test]
    fn test_new_rejects_empty_names() {
        assert!(CafeCatalog::new([("", vec!["Кафе"])]).is_err());
        assert!(CafeCatalog::new([("kazan", vec!["  "])]).is_err());
    }

    #[test]
    fn test_new_rejects_empty_catalog() {
        let cities: Vec<(String, Vec<String>)> = Vec::new();
        assert!(CafeCatalog::new(cities).is_err());
    }

    #[test]
    fn test_city_without_cafes_is_allowed() {
        let catalog = CafeCatalog::new([("omsk", Vec::<String>::new())]).unwrap();
        assert_eq!(catalog.cafes("omsk"), Some(&[][..]));
    }
}
