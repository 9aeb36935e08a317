//! Glue groups: disjoint sets of tiles that move as rigid bodies
//!
//! Membership is keyed by stable tile identity and owned by a board-scoped
//! registry value, so multiple boards and tests never interfere through
//! shared state. The registry only answers membership queries; it never
//! mutates board positions itself.

use std::collections::{HashMap, HashSet};

use crate::board::tile::{Tile, TileId};
use crate::io::error::{PuzzleError, Result};

/// Handle for one glue group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u32);

/// Registry of disjoint glue groups
///
/// Invariants: every tile belongs to at most one group, and every group the
/// registry holds is non-empty.
#[derive(Debug, Clone, Default)]
pub struct GlueRegistry {
    membership: HashMap<TileId, GroupId>,
    groups: HashMap<GroupId, HashSet<TileId>>,
    next_group: u32,
}

impl GlueRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Glue the anchor tile to its eligible neighbors
    ///
    /// The resulting group is the anchor plus every gluable neighbor, with
    /// any groups those neighbors already belong to merged in. Neighbors
    /// whose kind forbids gluing are excluded before merging, never grouped
    /// silently.
    ///
    /// # Errors
    ///
    /// Returns `Protected` if the anchor's kind forbids gluing and
    /// `AlreadyGlued` if the anchor is already a group member.
    pub fn glue(&mut self, anchor: Tile, neighbors: &[Tile]) -> Result<GroupId> {
        if !anchor.kind.can_glue() {
            return Err(PuzzleError::Protected {
                row: anchor.row,
                col: anchor.col,
            });
        }
        if self.membership.contains_key(&anchor.id) {
            return Err(PuzzleError::AlreadyGlued {
                row: anchor.row,
                col: anchor.col,
            });
        }

        let mut members: HashSet<TileId> = HashSet::new();
        members.insert(anchor.id);

        let mut absorbed_groups: HashSet<GroupId> = HashSet::new();
        for neighbor in neighbors {
            if !neighbor.kind.can_glue() {
                continue;
            }
            match self.membership.get(&neighbor.id) {
                Some(&group) => {
                    absorbed_groups.insert(group);
                }
                None => {
                    members.insert(neighbor.id);
                }
            }
        }

        for group in &absorbed_groups {
            if let Some(existing) = self.groups.remove(group) {
                members.extend(existing);
            }
        }

        let group = GroupId(self.next_group);
        self.next_group += 1;
        for member in &members {
            self.membership.insert(*member, group);
        }
        self.groups.insert(group, members);
        Ok(group)
    }

    /// Remove the tile from its group
    ///
    /// The remaining group may become a singleton; it is discarded only when
    /// it empties out entirely.
    ///
    /// # Errors
    ///
    /// Returns `NotGlued` if the tile is not a member of any group.
    pub fn unglue(&mut self, tile: Tile) -> Result<()> {
        let group = self.membership.remove(&tile.id).ok_or(PuzzleError::NotGlued {
            row: tile.row,
            col: tile.col,
        })?;
        if let Some(members) = self.groups.get_mut(&group) {
            members.remove(&tile.id);
            if members.is_empty() {
                self.groups.remove(&group);
            }
        }
        Ok(())
    }

    /// Group the tile belongs to, if any
    pub fn group_of(&self, tile: TileId) -> Option<GroupId> {
        self.membership.get(&tile).copied()
    }

    /// Whether the tile belongs to any group
    pub fn is_glued(&self, tile: TileId) -> bool {
        self.membership.contains_key(&tile)
    }

    /// Members of the group, in unspecified order
    pub fn members(&self, group: GroupId) -> impl Iterator<Item = TileId> + '_ {
        self.groups.get(&group).into_iter().flatten().copied()
    }

    /// Number of members in the group
    pub fn group_len(&self, group: GroupId) -> usize {
        self.groups.get(&group).map_or(0, HashSet::len)
    }

    /// Drop a tile's membership without error reporting
    ///
    /// Used when a tile leaves the board through deletion or hole
    /// absorption; unknown tiles are ignored.
    pub fn discard(&mut self, tile: TileId) {
        if let Some(group) = self.membership.remove(&tile) {
            if let Some(members) = self.groups.get_mut(&group) {
                members.remove(&tile);
                if members.is_empty() {
                    self.groups.remove(&group);
                }
            }
        }
    }

    /// Number of groups currently registered
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Drop every group
    pub fn clear(&mut self) {
        self.membership.clear();
        self.groups.clear();
    }
}
