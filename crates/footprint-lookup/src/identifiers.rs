//! Ordered, deduplicated sets of discovered personal identifiers.

use footprint_core::IdentifierKind;

/// Discovered identifiers, one insertion-ordered set per kind.
///
/// Values are trimmed and blank values are ignored. Emails compare
/// case-insensitively; other kinds compare exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
    names: Vec<String>,
    locations: Vec<String>,
    emails: Vec<String>,
    images: Vec<String>,
}

impl IdentifierSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning `true` if it was new.
    pub fn insert(&mut self, kind: IdentifierKind, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }

        let set = self.set_mut(kind);
        let exists = match kind {
            IdentifierKind::Email => set.iter().any(|v| v.eq_ignore_ascii_case(value)),
            _ => set.iter().any(|v| v == value),
        };
        if exists {
            return false;
        }

        set.push(value.to_string());
        true
    }

    /// Values of one kind in discovery order.
    #[must_use]
    pub fn values(&self, kind: IdentifierKind) -> &[String] {
        match kind {
            IdentifierKind::RealName => &self.names,
            IdentifierKind::Location => &self.locations,
            IdentifierKind::Email => &self.emails,
            IdentifierKind::Image => &self.images,
        }
    }

    #[must_use]
    pub fn count(&self, kind: IdentifierKind) -> usize {
        self.values(kind).len()
    }

    /// Consume the set, returning names, locations, emails and images.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<String>, Vec<String>, Vec<String>) {
        (self.names, self.locations, self.emails, self.images)
    }

    fn set_mut(&mut self, kind: IdentifierKind) -> &mut Vec<String> {
        match kind {
            IdentifierKind::RealName => &mut self.names,
            IdentifierKind::Location => &mut self.locations,
            IdentifierKind::Email => &mut self.emails,
            IdentifierKind::Image => &mut self.images,
        }
    }
}
