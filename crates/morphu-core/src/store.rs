//! Typed persistence for posts and whiteboard layout.
//!
//! Wraps a key-value [`Storage`] backend with the two fixed keys the
//! board persists under. Reads degrade gracefully: a missing or corrupt
//! payload yields an empty post list or a default whiteboard rather
//! than an error.

use crate::post::{PostData, PostId};
use crate::storage::{FileStorage, Storage, StorageError, StorageResult};
use crate::whiteboard::WhiteboardState;
use kurbo::Point;
use std::sync::Arc;

/// Key under which the post list is stored.
pub const POSTS_STORAGE_KEY: &str = "morphu_posts";

/// Key under which the whiteboard layout is stored.
pub const WHITEBOARD_STORAGE_KEY: &str = "morphu_whiteboard";

/// Persistent store for posts and whiteboard state.
pub struct BoardStore<S: Storage> {
    /// Storage backend.
    storage: Arc<S>,
}

impl<S: Storage> BoardStore<S> {
    /// Create a new board store over the given storage backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Get all saved posts.
    ///
    /// A missing key yields an empty list; a corrupt payload is logged
    /// and also yields an empty list.
    pub async fn posts(&self) -> StorageResult<Vec<PostData>> {
        let Some(json) = self.storage.get(POSTS_STORAGE_KEY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&json) {
            Ok(posts) => Ok(posts),
            Err(e) => {
                log::warn!("Discarding corrupt post list: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Save a new post.
    pub async fn save_post(&self, post: &PostData) -> StorageResult<()> {
        let mut posts = self.posts().await?;
        posts.push(post.clone());
        self.write_posts(&posts).await
    }

    /// Replace a saved post by ID, or append it if not present.
    pub async fn update_post(&self, post: &PostData) -> StorageResult<()> {
        let mut posts = self.posts().await?;
        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post.clone(),
            None => posts.push(post.clone()),
        }
        self.write_posts(&posts).await
    }

    /// Delete a post by ID.
    ///
    /// Any placement for the post is left on the whiteboard; callers
    /// that want both gone also call
    /// [`WhiteboardState::remove_placement`].
    pub async fn delete_post(&self, post_id: PostId) -> StorageResult<()> {
        let mut posts = self.posts().await?;
        posts.retain(|p| p.id != post_id);
        self.write_posts(&posts).await
    }

    async fn write_posts(&self, posts: &[PostData]) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(posts)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(POSTS_STORAGE_KEY, &json).await
    }

    /// Get the whiteboard state.
    ///
    /// A missing key or corrupt payload yields the default empty board.
    pub async fn whiteboard_state(&self) -> StorageResult<WhiteboardState> {
        let Some(json) = self.storage.get(WHITEBOARD_STORAGE_KEY).await? else {
            return Ok(WhiteboardState::default());
        };
        match serde_json::from_str(&json) {
            Ok(state) => Ok(state),
            Err(e) => {
                log::warn!("Discarding corrupt whiteboard state: {}", e);
                Ok(WhiteboardState::default())
            }
        }
    }

    /// Save the whiteboard state.
    pub async fn save_whiteboard_state(&self, state: &WhiteboardState) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(WHITEBOARD_STORAGE_KEY, &json).await
    }

    /// Move a single post's placement, creating it if missing.
    pub async fn update_post_placement(
        &self,
        post_id: PostId,
        position: Point,
        z_index: Option<u32>,
    ) -> StorageResult<()> {
        let mut state = self.whiteboard_state().await?;
        state.upsert_placement(post_id, position, z_index);
        self.save_whiteboard_state(&state).await
    }

    /// Place a new post on the whiteboard, stacked above everything else.
    pub async fn add_post_placement(&self, post_id: PostId, position: Point) -> StorageResult<()> {
        let mut state = self.whiteboard_state().await?;
        state.add_placement(post_id, position);
        self.save_whiteboard_state(&state).await
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}

/// Create the default file-backed storage.
pub fn create_default_storage() -> StorageResult<Arc<FileStorage>> {
    Ok(Arc::new(FileStorage::default_location()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PostStyle;
    use crate::storage::MemoryStorage;

    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn dummy_raw_waker() -> RawWaker {
            fn no_op(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker { dummy_raw_waker() }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(result) => return result,
                Poll::Pending => {}
            }
        }
    }

    fn store() -> BoardStore<MemoryStorage> {
        BoardStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_empty_store() {
        let store = store();
        assert!(block_on(store.posts()).unwrap().is_empty());
        assert_eq!(
            block_on(store.whiteboard_state()).unwrap(),
            WhiteboardState::default()
        );
    }

    #[test]
    fn test_save_and_load_posts() {
        let store = store();
        let post = PostData::new("first");

        block_on(store.save_post(&post)).unwrap();
        block_on(store.save_post(&PostData::new("second"))).unwrap();

        let posts = block_on(store.posts()).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0], post);
    }

    #[test]
    fn test_update_post_replaces() {
        let store = store();
        let mut post = PostData::new("before");
        block_on(store.save_post(&post)).unwrap();

        post.content = "after".to_string();
        post.style = PostStyle::default().with_text_size(24.0);
        block_on(store.update_post(&post)).unwrap();

        let posts = block_on(store.posts()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "after");
        assert!((posts[0].style.text_size - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_delete_post() {
        let store = store();
        let keep = PostData::new("keep");
        let gone = PostData::new("gone");

        block_on(store.save_post(&keep)).unwrap();
        block_on(store.save_post(&gone)).unwrap();
        block_on(store.delete_post(gone.id)).unwrap();

        let posts = block_on(store.posts()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, keep.id);
    }

    #[test]
    fn test_corrupt_posts_yield_empty() {
        let store = store();
        block_on(store.storage().set(POSTS_STORAGE_KEY, "not json")).unwrap();
        assert!(block_on(store.posts()).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_whiteboard_yields_default() {
        let store = store();
        block_on(store.storage().set(WHITEBOARD_STORAGE_KEY, "{broken")).unwrap();
        assert_eq!(
            block_on(store.whiteboard_state()).unwrap(),
            WhiteboardState::default()
        );
    }

    #[test]
    fn test_add_post_placement_stacks() {
        let store = store();
        let a = PostData::new("a");
        let b = PostData::new("b");

        block_on(store.add_post_placement(a.id, Point::new(10.0, 10.0))).unwrap();
        block_on(store.add_post_placement(b.id, Point::new(20.0, 20.0))).unwrap();

        let state = block_on(store.whiteboard_state()).unwrap();
        assert_eq!(state.placement(a.id).unwrap().z_index, Some(1));
        assert_eq!(state.placement(b.id).unwrap().z_index, Some(2));
    }

    #[test]
    fn test_update_post_placement_upserts() {
        let store = store();
        let post = PostData::new("movable");

        block_on(store.update_post_placement(post.id, Point::new(1.0, 2.0), None)).unwrap();
        block_on(store.update_post_placement(post.id, Point::new(3.0, 4.0), Some(9))).unwrap();

        let state = block_on(store.whiteboard_state()).unwrap();
        assert_eq!(state.placements.len(), 1);
        let placement = state.placement(post.id).unwrap();
        assert_eq!(placement.position, Point::new(3.0, 4.0));
        assert_eq!(placement.z_index, Some(9));
    }

    #[test]
    fn test_delete_post_leaves_placement() {
        let store = store();
        let post = PostData::new("placed");

        block_on(store.save_post(&post)).unwrap();
        block_on(store.add_post_placement(post.id, Point::new(0.0, 0.0))).unwrap();
        block_on(store.delete_post(post.id)).unwrap();

        assert!(block_on(store.posts()).unwrap().is_empty());
        let state = block_on(store.whiteboard_state()).unwrap();
        assert!(state.placement(post.id).is_some());
    }
}
