//! Whiteboard layout state: where posts (and the profile card) sit.

use crate::post::PostId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placement of a post on the whiteboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPlacement {
    /// The post this placement refers to.
    pub post_id: PostId,
    /// Position on the board.
    pub position: Point,
    /// Stacking order. Absent counts as 0.
    #[serde(default)]
    pub z_index: Option<u32>,
}

impl PostPlacement {
    /// Effective stacking order (absent = 0).
    pub fn effective_z(&self) -> u32 {
        self.z_index.unwrap_or(0)
    }
}

/// A user profile shown on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// Display name.
    pub username: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Short bio text.
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserProfile {
    /// Create a new profile with the given username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            avatar_url: None,
            bio: None,
        }
    }
}

/// Placement of the profile card on the whiteboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePlacement {
    /// The profile this placement refers to.
    pub user_profile_id: Uuid,
    /// Position on the board.
    pub position: Point,
    /// Stacking order. Absent counts as 0.
    #[serde(default)]
    pub z_index: Option<u32>,
}

/// The persisted layout of a whiteboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WhiteboardState {
    /// Post placements, in insertion order.
    pub placements: Vec<PostPlacement>,
    /// Profile card placement, if placed.
    #[serde(default)]
    pub profile_placement: Option<ProfilePlacement>,
}

impl WhiteboardState {
    /// Create an empty whiteboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the placement for a post.
    pub fn placement(&self, post_id: PostId) -> Option<&PostPlacement> {
        self.placements.iter().find(|p| p.post_id == post_id)
    }

    /// The highest stacking order currently in use (0 on an empty board).
    pub fn max_z_index(&self) -> u32 {
        self.placements
            .iter()
            .map(PostPlacement::effective_z)
            .max()
            .unwrap_or(0)
    }

    /// Replace a post's placement in place, or append it if absent.
    pub fn upsert_placement(&mut self, post_id: PostId, position: Point, z_index: Option<u32>) {
        let placement = PostPlacement {
            post_id,
            position,
            z_index,
        };
        match self.placements.iter_mut().find(|p| p.post_id == post_id) {
            Some(existing) => *existing = placement,
            None => self.placements.push(placement),
        }
    }

    /// Add a placement for a new post, stacked above everything else.
    pub fn add_placement(&mut self, post_id: PostId, position: Point) {
        let z = self.max_z_index() + 1;
        self.placements.push(PostPlacement {
            post_id,
            position,
            z_index: Some(z),
        });
    }

    /// Remove a post's placement. Returns true if one was removed.
    pub fn remove_placement(&mut self, post_id: PostId) -> bool {
        let before = self.placements.len();
        self.placements.retain(|p| p.post_id != post_id);
        self.placements.len() != before
    }

    /// Restack a post above everything else. Returns false if unplaced.
    pub fn bring_to_front(&mut self, post_id: PostId) -> bool {
        let z = self.max_z_index() + 1;
        match self.placements.iter_mut().find(|p| p.post_id == post_id) {
            Some(placement) => {
                placement.z_index = Some(z);
                true
            }
            None => false,
        }
    }

    /// Placements sorted back to front (stable for equal z).
    pub fn placements_ordered(&self) -> Vec<&PostPlacement> {
        let mut ordered: Vec<&PostPlacement> = self.placements.iter().collect();
        ordered.sort_by_key(|p| p.effective_z());
        ordered
    }

    /// Check if the board has no placements at all.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty() && self.profile_placement.is_none()
    }
}
