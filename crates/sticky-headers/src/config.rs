/// Which overlay a [`crate::HeaderDecoration`] draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum HeaderMode {
    /// Every header scrolls with the first item of its group.
    Static,
    /// The leading header stays pinned until the next one pushes it out.
    #[default]
    Sticky,
}

/// How group starts are found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum GroupLookup {
    /// Ask the adapter on every query. Linear in the item count; fine for
    /// short lists and adapters whose identifiers change without notice.
    #[default]
    Scan,
    /// Keep a sorted table of group starts, rebuilt when the item count
    /// changes or headers are invalidated.
    Indexed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DecorationConfig {
    pub mode: HeaderMode,
    pub group_lookup: GroupLookup,
}

impl DecorationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: HeaderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn group_lookup(mut self, lookup: GroupLookup) -> Self {
        self.group_lookup = lookup;
        self
    }

    pub fn is_sticky(&self) -> bool {
        self.mode == HeaderMode::Sticky
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sticky_scan() {
        let c = DecorationConfig::new();
        assert!(c.is_sticky());
        assert_eq!(c.group_lookup, GroupLookup::Scan);

        let c = c.mode(HeaderMode::Static).group_lookup(GroupLookup::Indexed);
        assert!(!c.is_sticky());
        assert_eq!(c.group_lookup, GroupLookup::Indexed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_json() {
        let c: DecorationConfig = serde_json::from_str(r#"{"group_lookup":"indexed"}"#).unwrap();
        assert_eq!(c.mode, HeaderMode::Sticky);
        assert_eq!(c.group_lookup, GroupLookup::Indexed);

        let out = serde_json::to_string(&c.mode(HeaderMode::Static)).unwrap();
        assert_eq!(out, r#"{"mode":"static","group_lookup":"indexed"}"#);
    }
}
