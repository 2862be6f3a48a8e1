//! Context-menu model — derives the menu tree from the tag-group list and
//! resolves clicked node ids back to actions.
//!
//! The tree is entirely derived state: it is rebuilt from scratch on every
//! settings change, never mutated incrementally. Group entries carry the
//! group's opaque id in their node id, so a click on an entry from a
//! previous tree can only be ignored, never remapped to a different group.

use tracing::debug;

use reelmark_config::{GroupId, TagGroupList};

/// Id of the root menu entry — "import with no tags".
pub const MENU_ROOT: &str = "reelmark-import";

/// Id of the fixed "without tags" child entry.
pub const MENU_PLAIN: &str = "reelmark-import-plain";

/// Id of the fixed "choose tags at click time" child entry.
pub const MENU_ASK: &str = "reelmark-import-ask";

/// Prefix for per-group child entries; the group id follows.
const GROUP_PREFIX: &str = "reelmark-group-";

/// One entry in the derived context-menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    /// Node id delivered back in click events.
    pub id: String,

    /// Parent node id; `None` for the root.
    pub parent_id: Option<String>,

    /// Label shown to the user.
    pub label: String,
}

/// The menu-node id for a tag group.
pub fn group_menu_id(id: GroupId) -> String {
    format!("{GROUP_PREFIX}{id}")
}

/// Derive the full menu tree for a group list.
///
/// The root and the two fixed children are always present, even for an
/// empty list. Group entries follow in list order. Deterministic: the same
/// list yields the identical node sequence.
pub fn build_menu(groups: &TagGroupList) -> Vec<MenuNode> {
    let mut nodes = Vec::with_capacity(groups.len() + 3);

    nodes.push(MenuNode {
        id: MENU_ROOT.to_string(),
        parent_id: None,
        label: "Queue for import".to_string(),
    });
    nodes.push(MenuNode {
        id: MENU_PLAIN.to_string(),
        parent_id: Some(MENU_ROOT.to_string()),
        label: "Without tags".to_string(),
    });
    nodes.push(MenuNode {
        id: MENU_ASK.to_string(),
        parent_id: Some(MENU_ROOT.to_string()),
        label: "Choose tags…".to_string(),
    });

    for group in groups {
        nodes.push(MenuNode {
            id: group_menu_id(group.id),
            parent_id: Some(MENU_ROOT.to_string()),
            label: group.label.clone(),
        });
    }

    nodes
}

/// What a click on a menu node should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Submit the import with the given tags (possibly none).
    Submit(Vec<String>),

    /// Ask the user for tags before submitting.
    AskTags,

    /// Not one of ours, or a stale group entry — do nothing.
    Ignore,
}

/// Resolve a clicked node id against the *current* group list.
///
/// A group entry whose id is no longer in the list (the settings changed
/// between render and click) is ignored, as is any id this crate never
/// produced.
pub fn resolve_click(node_id: &str, groups: &TagGroupList) -> ClickAction {
    match node_id {
        MENU_ROOT | MENU_PLAIN => ClickAction::Submit(Vec::new()),
        MENU_ASK => ClickAction::AskTags,
        other => {
            let Some(raw) = other.strip_prefix(GROUP_PREFIX) else {
                return ClickAction::Ignore;
            };
            let Ok(raw) = raw.parse::<u64>() else {
                return ClickAction::Ignore;
            };
            let id = GroupId::from_raw(raw);
            match groups.iter().find(|g| g.id == id) {
                Some(group) => ClickAction::Submit(group.tags.clone()),
                None => {
                    debug!(%node_id, "Click on stale group entry, ignoring");
                    ClickAction::Ignore
                }
            }
        }
    }
}
