//! Café query validation and filtering

use crate::catalog::{CafeCatalog, NAME_SEPARATOR};
use crate::error::{Error, Result};

/// Raw query parameters of `GET /cafe`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeQuery {
    pub city: Option<String>,
    pub count: Option<String>,
    pub search: Option<String>,
}

/// Build from decoded query-string pairs. A repeated key keeps its first
/// value; unrecognised keys are ignored.
impl FromIterator<(String, String)> for CafeQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "city" => &mut query.city,
                "count" => &mut query.count,
                "search" => &mut query.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }
}

/// How `search` is matched against café names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

impl CafeQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Default::default()
        }
    }

    pub fn with_count(mut self, count: impl Into<String>) -> Self {
        self.count = Some(count.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Parse `count`. An absent or empty value means no limit.
    pub fn limit(&self) -> Result<Option<usize>> {
        match self.count.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<usize>()
                .map(Some)
                .map_err(|_| Error::InvalidCount),
        }
    }

    /// Validate the parameters and return the matching cafés in catalog order.
    ///
    /// The city is checked before the count, so a request that is wrong on
    /// both counts reports `UnknownCity`.
    pub fn execute<'a>(
        &self,
        catalog: &'a CafeCatalog,
        options: SearchOptions,
    ) -> Result<Vec<&'a str>> {
        let cafes = self
            .city
            .as_deref()
            .and_then(|city| catalog.cafes(city))
            .ok_or(Error::UnknownCity)?;

        let limit = self.limit()?;
        let matcher = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| Matcher::new(s, options));

        let matches = cafes
            .iter()
            .map(String::as_str)
            .filter(|name| matcher.as_ref().map_or(true, |m| m.matches(name)))
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        Ok(matches)
    }
}

/// Render a result set as the response body.
pub fn render(cafes: &[&str]) -> String {
    cafes.join(NAME_SEPARATOR)
}

struct Matcher {
    needle: String,
    case_sensitive: bool,
}

impl Matcher {
    fn new(search: &str, options: SearchOptions) -> Self {
        let needle = if options.case_sensitive {
            search.to_string()
        } else {
            search.to_lowercase()
        };

        Self {
            needle,
            case_sensitive: options.case_sensitive,
        }
    }

    fn matches(&self, name: &str) -> bool {
        if self.case_sensitive {
            name.contains(&self.needle)
        } else {
            name.to_lowercase().contains(&self.needle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(query: CafeQuery) -> Result<Vec<String>> {
        let catalog = CafeCatalog::default();
        query
            .execute(&catalog, SearchOptions::default())
            .map(|found| found.into_iter().map(str::to_string).collect())
    }

    #[test]
    fn test_missing_city() {
        assert_eq!(run(CafeQuery::default()), Err(Error::UnknownCity));
    }

    #[test]
    fn test_unknown_city() {
        assert_eq!(run(CafeQuery::new("omsk")), Err(Error::UnknownCity));
        assert_eq!(run(CafeQuery::new("")), Err(Error::UnknownCity));
    }

    #[test]
    fn test_unknown_city_wins_over_bad_count() {
        let query = CafeQuery::new("omsk").with_count("na");
        assert_eq!(run(query), Err(Error::UnknownCity));
    }

    #[test]
    fn test_invalid_count() {
        for raw in ["na", "-1", "1.5", " 2", "2x"] {
            let query = CafeQuery::new("tula").with_count(raw);
            assert_eq!(run(query), Err(Error::InvalidCount), "count={raw:?}");
        }
    }

    #[test]
    fn test_empty_count_means_no_limit() {
        let query = CafeQuery::new("tula").with_count("");
        assert_eq!(run(query).unwrap().len(), 3);
    }

    #[test]
    fn test_count_limits_in_order() {
        assert!(run(CafeQuery::new("moscow").with_count("0")).unwrap().is_empty());
        assert_eq!(
            run(CafeQuery::new("moscow").with_count("2")).unwrap(),
            vec!["Мир кофе", "Сладкоежка"]
        );
        assert_eq!(run(CafeQuery::new("moscow").with_count("100")).unwrap().len(), 5);
    }

    #[test]
    fn test_search_counts() {
        for (search, want) in [("фасоль", 0), ("кофе", 2), ("вилка", 1)] {
            let found = run(CafeQuery::new("moscow").with_search(search)).unwrap();
            assert_eq!(found.len(), want, "search={search:?}");
        }
    }

    #[test]
    fn test_search_is_case_sensitive_by_default() {
        let found = run(CafeQuery::new("moscow").with_search("ложка")).unwrap();
        assert!(found.is_empty());

        let found = run(CafeQuery::new("moscow").with_search("Ложка")).unwrap();
        assert_eq!(found, vec!["Ложка и вилка"]);
    }

    #[test]
    fn test_case_insensitive_search() {
        let catalog = CafeCatalog::default();
        let options = SearchOptions {
            case_sensitive: false,
        };

        let found = CafeQuery::new("moscow")
            .with_search("ЛОЖКА")
            .execute(&catalog, options)
            .unwrap();
        assert_eq!(found, vec!["Ложка и вилка"]);
    }

    #[test]
    fn test_count_applies_after_search() {
        let query = CafeQuery::new("moscow").with_search("кофе").with_count("1");
        assert_eq!(run(query).unwrap(), vec!["Мир кофе"]);
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let query = CafeQuery::new("tula").with_search("");
        assert_eq!(run(query).unwrap().len(), 3);
    }

    #[test]
    fn test_from_pairs_keeps_first_value() {
        let pairs = [
            ("city", "moscow"),
            ("count", "na"),
            ("city", "omsk"),
            ("count", "2"),
            ("page", "3"),
        ];
        let query: CafeQuery = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert_eq!(query, CafeQuery::new("moscow").with_count("na"));
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&[]), "");
        assert_eq!(render(&["Самовар"]), "Самовар");
        assert_eq!(render(&["Мир кофе", "Сладкоежка"]), "Мир кофе,Сладкоежка");
    }
}
