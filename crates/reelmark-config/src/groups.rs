//! Tag groups and the flat text codec used by the options surface.
//!
//! A tag group is a named, ordered set of tags the user can apply in one
//! click when queueing an import. The options surface edits groups as a
//! single multi-line text block, one group per line:
//!
//! ```text
//! music,music,audio
//! talks,conference,talk
//! ```
//!
//! The first comma-separated column is the label; the remaining columns are
//! the tags, in order. There is no escaping: a label or tag containing a
//! comma or newline will not survive a round trip.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier for a tag group.
///
/// Allocated from a process-wide counter when the group is created. Ids are
/// never persisted; reloading the configuration assigns fresh ids, so a menu
/// entry derived from an old id can never silently resolve to a different
/// group after the list is reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(u64);

impl GroupId {
    /// Allocate the next id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Reconstruct an id from its raw value (e.g. parsed out of a menu-node id).
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value of this id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered set of tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    /// Stable identifier, assigned at creation.
    pub id: GroupId,

    /// Label shown in the context menu.
    pub label: String,

    /// Tags submitted when this group is chosen, in order.
    pub tags: Vec<String>,
}

impl TagGroup {
    /// Create a group with a freshly allocated id.
    pub fn new(label: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: GroupId::next(),
            label: label.into(),
            tags,
        }
    }
}

/// An ordered list of tag groups. Order determines menu display order.
pub type TagGroupList = Vec<TagGroup>;

/// Encode a group list into the flat text form, one group per line.
///
/// Labels and tags are written verbatim; embedded commas or newlines are a
/// caller-visible limitation of the format.
pub fn encode_groups(groups: &[TagGroup]) -> String {
    groups
        .iter()
        .map(|group| {
            let mut line = group.label.clone();
            for tag in &group.tags {
                line.push(',');
                line.push_str(tag);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode the flat text form into a group list.
///
/// Each line splits on commas: first column label, remaining columns tags.
/// Nothing is trimmed; consecutive or trailing commas produce empty-string
/// tags. A line with no commas has no tags and is dropped — a label-only
/// line never survives decoding. Every surviving group gets a fresh id.
pub fn decode_groups(text: &str) -> TagGroupList {
    text.split('\n')
        .filter_map(|line| {
            let mut columns = line.split(',');
            let label = columns.next().unwrap_or_default();
            let tags: Vec<String> = columns.map(str::to_string).collect();
            if tags.is_empty() {
                return None;
            }
            Some(TagGroup::new(label, tags))
        })
        .collect()
}
