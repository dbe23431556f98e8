//! Node lookup by operator-facing selectors
//!
//! Attempts a couple of different matches in order of importance: a bare
//! numeric id, an `id-shortname` (or `id_shortname`) pair, and finally a
//! shortname scoped to a unit.

use super::Catalog;
use crate::domain::ManifestNode;
use crate::error::{Result, malformed_selector, node_not_found};

impl Catalog {
    /// Find a node by selector. The unit is only consulted for the
    /// shortname form; id forms are deployment-wide.
    pub fn find_node(&self, unit: Option<&str>, selector: &str) -> Result<&ManifestNode> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Err(malformed_selector(selector));
        }

        // Bare id, if the selector is only digits; a miss falls through to
        // the shortname attempts since a shortname may itself be numeric
        if selector.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(id) = selector.parse::<u64>() {
                if let Some(node) = self.nodes().find(|n| n.id.0 == id) {
                    return Ok(node);
                }
            }
        }

        // id-shortname pair
        if let Some((id, short)) = split_id_shortname(selector) {
            if let Some(node) = self
                .nodes()
                .find(|n| n.id.0 == id && n.shortname() == short)
            {
                return Ok(node);
            }
        }

        // Shortname within the unit
        if let Some(unit) = unit {
            let mut matches: Vec<&ManifestNode> = self
                .nodes()
                .filter(|n| n.unit() == unit && n.shortname() == selector)
                .collect();
            matches.sort_by_key(|n| n.id);
            if let Some(node) = matches.first().copied() {
                return Ok(node);
            }
        }

        Err(node_not_found(selector))
    }

    /// The unit's default node: named "Default", else "default", else the
    /// first one registered
    pub fn default_node(&self, unit: &str) -> Option<&ManifestNode> {
        let mut in_unit: Vec<&ManifestNode> =
            self.nodes().filter(|n| n.unit() == unit).collect();
        in_unit.sort_by_key(|n| n.id);
        in_unit
            .iter()
            .find(|n| n.name() == "Default")
            .or_else(|| in_unit.iter().find(|n| n.name() == "default"))
            .or_else(|| in_unit.first())
            .copied()
    }
}

/// Split an `id-shortname` or `id_shortname` selector; the id part must be
/// all digits and both parts non-empty
fn split_id_shortname(selector: &str) -> Option<(u64, &str)> {
    let separator = selector.find(|c: char| !c.is_ascii_digit())?;
    let sep_char = selector[separator..].chars().next()?;
    if separator == 0 || !matches!(sep_char, '-' | '_') {
        return None;
    }
    let id = selector[..separator].parse::<u64>().ok()?;
    let short = &selector[separator + sep_char.len_utf8()..];
    if short.is_empty() {
        return None;
    }
    Some((id, short))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_group("Default", "hq");
        catalog.add_computer("Design iMac", "hq");
        catalog.add_computer("Design iMac", "lab");
        catalog
    }

    #[test]
    fn test_find_by_id() {
        let catalog = catalog();
        let node = catalog.find_node(None, "2").unwrap();
        assert_eq!(node.name(), "Design iMac");
        assert_eq!(node.unit(), "hq");
    }

    #[test]
    fn test_find_by_id_shortname() {
        let catalog = catalog();
        assert!(catalog.find_node(None, "2-design-imac").is_ok());
        assert!(catalog.find_node(None, "2_design-imac").is_ok());
        assert!(catalog.find_node(None, "2-wrong-short").is_err());
    }

    #[test]
    fn test_find_by_shortname_scoped_to_unit() {
        let catalog = catalog();
        let node = catalog.find_node(Some("lab"), "design-imac").unwrap();
        assert_eq!(node.unit(), "lab");
        assert!(catalog.find_node(None, "design-imac").is_err());
    }

    #[test]
    fn test_empty_selector_is_malformed() {
        let catalog = catalog();
        let err = catalog.find_node(None, "  ").unwrap_err();
        assert!(err.to_string().contains("Malformed"));
    }

    #[test]
    fn test_unknown_id_not_found() {
        let catalog = catalog();
        assert!(catalog.find_node(None, "99").is_err());
    }

    #[test]
    fn test_default_node_prefers_name() {
        let catalog = catalog();
        assert_eq!(catalog.default_node("hq").map(|n| n.name()), Some("Default"));
        // No "Default" in lab; first registered wins
        assert_eq!(
            catalog.default_node("lab").map(|n| n.name()),
            Some("Design iMac")
        );
        assert!(catalog.default_node("empty").is_none());
    }

    #[test]
    fn test_split_id_shortname() {
        assert_eq!(split_id_shortname("12-lab"), Some((12, "lab")));
        assert_eq!(split_id_shortname("12_lab-2"), Some((12, "lab-2")));
        assert_eq!(split_id_shortname("lab"), None);
        assert_eq!(split_id_shortname("12-"), None);
        assert_eq!(split_id_shortname("12x"), None);
    }
}
