use crate::catalog::PlatformCatalog;
use crate::error::{LookupError, Result};
use footprint_core::PlatformId;

/// Which platforms a lookup queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformFilter {
    /// The configured default set
    Defaults,
    /// Only these platforms, in this order
    Specific(Vec<PlatformId>),
}

impl PlatformFilter {
    /// Parse an optional request restriction.
    ///
    /// `None` or an empty list selects the defaults. Ids are normalised and
    /// deduplicated, keeping first occurrence order.
    ///
    /// # Errors
    /// Returns `InvalidRequest` for malformed or unknown ids, or when more
    /// than `max_platforms` distinct platforms are named.
    pub fn from_request(
        requested: Option<&[String]>,
        catalog: &PlatformCatalog,
        max_platforms: usize,
    ) -> Result<Self> {
        let Some(requested) = requested.filter(|r| !r.is_empty()) else {
            return Ok(Self::Defaults);
        };

        let mut ids: Vec<PlatformId> = Vec::new();
        for raw in requested {
            let id = PlatformId::new(raw)?;
            if !catalog.contains(&id) {
                return Err(LookupError::InvalidRequest(format!(
                    "unknown platform '{id}'"
                )));
            }
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        if ids.len() > max_platforms {
            return Err(LookupError::InvalidRequest(format!(
                "at most {max_platforms} platforms may be requested, got {}",
                ids.len()
            )));
        }

        Ok(Self::Specific(ids))
    }

    /// Resolve to the ordered list of platforms to query.
    pub fn resolve(&self, defaults: &[PlatformId]) -> Vec<PlatformId> {
        match self {
            Self::Defaults => defaults.to_vec(),
            Self::Specific(ids) => ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_none_and_empty_select_defaults() {
        let catalog = PlatformCatalog::builtin();
        assert_eq!(
            PlatformFilter::from_request(None, &catalog, 10).expect("filter"),
            PlatformFilter::Defaults
        );
        assert_eq!(
            PlatformFilter::from_request(Some(&[]), &catalog, 10).expect("filter"),
            PlatformFilter::Defaults
        );
    }

    #[test]
    fn test_specific_keeps_order_and_dedups() {
        let catalog = PlatformCatalog::builtin();
        let requested = strings(&["Reddit", "github", "reddit"]);
        let filter =
            PlatformFilter::from_request(Some(&requested), &catalog, 10).expect("filter");

        let resolved = filter.resolve(&catalog.ids());
        let names: Vec<_> = resolved.iter().map(PlatformId::as_str).collect();
        assert_eq!(names, ["reddit", "github"]);
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let catalog = PlatformCatalog::builtin();
        let requested = strings(&["github", "myspace"]);
        let err = PlatformFilter::from_request(Some(&requested), &catalog, 10)
            .expect_err("unknown platform");
        assert!(err.to_string().contains("myspace"));
    }

    #[test]
    fn test_malformed_platform_rejected() {
        let catalog = PlatformCatalog::builtin();
        let requested = strings(&["git hub"]);
        assert!(matches!(
            PlatformFilter::from_request(Some(&requested), &catalog, 10),
            Err(LookupError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_too_many_platforms_rejected() {
        let catalog = PlatformCatalog::builtin();
        let requested = strings(&["github", "gitlab", "reddit"]);
        assert!(PlatformFilter::from_request(Some(&requested), &catalog, 2).is_err());
    }
}
