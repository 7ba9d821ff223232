//! Grouped object listings
//!
//! Partitions a flat sequence of object names into a directory-like view by
//! first path segment. Grouping is single-level: anything after the first
//! `/` stays together as one entry, however many further separators it
//! contains.

use std::fmt;

use serde::Serialize;

/// Reserved key for objects at the bucket root (no `/` in the name)
pub const ROOT_GROUP: &str = "/";

/// One group of object names sharing a first path segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectGroup {
    /// First path segment, or [`ROOT_GROUP`] for root-level objects
    pub prefix: String,
    /// Remaining name parts, in backend-returned order
    pub entries: Vec<String>,
}

/// Object names grouped by their top-level prefix
///
/// Groups appear in the order their prefix was first seen; entries keep the
/// order the backend returned them in. Built fresh per listing call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedListing {
    pub groups: Vec<ObjectGroup>,
}

impl GroupedListing {
    /// Group a sequence of object names by first path segment
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut listing = Self::default();
        for name in names {
            let name = name.as_ref();
            match name.split_once('/') {
                None => listing.push(ROOT_GROUP, name),
                Some((prefix, rest)) => listing.push(prefix, rest),
            }
        }
        listing
    }

    fn push(&mut self, prefix: &str, entry: &str) {
        match self.groups.iter_mut().find(|g| g.prefix == prefix) {
            Some(group) => group.entries.push(entry.to_string()),
            None => self.groups.push(ObjectGroup {
                prefix: prefix.to_string(),
                entries: vec![entry.to_string()],
            }),
        }
    }

    /// Whether no object names were grouped
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of grouped entries
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// Entries under the root group, if any
    pub fn root_entries(&self) -> &[String] {
        self.groups
            .iter()
            .find(|g| g.prefix == ROOT_GROUP)
            .map(|g| g.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Entries under a named group, if present
    pub fn group(&self, prefix: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.prefix == prefix)
            .map(|g| g.entries.as_slice())
    }
}

impl fmt::Display for GroupedListing {
    /// Nested display: root-level names directly, grouped names under a
    /// header equal to the first path segment
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            if group.prefix == ROOT_GROUP {
                for entry in &group.entries {
                    writeln!(f, "- {entry}")?;
                }
            } else {
                writeln!(f, "{}/", group.prefix)?;
                for entry in &group.entries {
                    writeln!(f, "    - {entry}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_by_first_segment() {
        let listing =
            GroupedListing::from_names(["a.txt", "dir/b.txt", "dir/sub/c.txt", "d.txt"]);

        assert_eq!(listing.root_entries(), &["a.txt", "d.txt"]);
        assert_eq!(
            listing.group("dir"),
            Some(&["b.txt".to_string(), "sub/c.txt".to_string()][..])
        );
        assert_eq!(listing.len(), 4);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let names = ["a.txt", "dir/b.txt", "dir/sub/c.txt", "d.txt"];
        assert_eq!(
            GroupedListing::from_names(names),
            GroupedListing::from_names(names)
        );
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let listing = GroupedListing::from_names(["z/1", "a/2", "z/3", "root.txt"]);

        let prefixes: Vec<&str> = listing.groups.iter().map(|g| g.prefix.as_str()).collect();
        assert_eq!(prefixes, ["z", "a", ROOT_GROUP]);
        assert_eq!(listing.group("z"), Some(&["1".to_string(), "3".to_string()][..]));
    }

    #[test]
    fn test_deep_nesting_is_not_recursed() {
        let listing = GroupedListing::from_names(["dir/sub/deeper/c.txt"]);

        assert_eq!(
            listing.group("dir"),
            Some(&["sub/deeper/c.txt".to_string()][..])
        );
        assert!(listing.group("sub").is_none());
    }

    #[test]
    fn test_empty_listing() {
        let listing = GroupedListing::from_names(Vec::<String>::new());
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
        assert_eq!(listing.to_string(), "");
    }

    #[test]
    fn test_render() {
        let listing =
            GroupedListing::from_names(["a.txt", "dir/b.txt", "dir/sub/c.txt", "d.txt"]);

        insta::assert_snapshot!(listing.to_string(), @r###"
        - a.txt
        - d.txt
        dir/
            - b.txt
            - sub/c.txt
        "###);
    }
}
