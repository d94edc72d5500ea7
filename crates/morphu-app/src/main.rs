//! Morphu board audit entry point (native).
//!
//! Loads the locally persisted board and prints accessibility warnings
//! for every saved post, walking placed posts in stacking order first.

use morphu_core::storage::{FileStorage, StorageResult};
use morphu_core::{check_accessibility, create_default_storage, BoardStore, PostData, StyleProps};
use std::path::PathBuf;
use std::sync::Arc;

fn main() {
    env_logger::init();
    log::info!("Starting Morphu board audit");

    if let Err(e) = pollster::block_on(run()) {
        log::error!("Audit failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> StorageResult<()> {
    // Optional board directory argument; defaults to the shared location
    let storage = match std::env::args().nth(1) {
        Some(dir) => Arc::new(FileStorage::new(PathBuf::from(dir))?),
        None => create_default_storage()?,
    };
    log::info!("Auditing board at {}", storage.base_path().display());

    let store = BoardStore::new(storage);
    let posts = store.posts().await?;
    let board = store.whiteboard_state().await?;

    let mut flagged = 0usize;
    let mut audited = 0usize;

    // Placed posts, back to front
    for placement in board.placements_ordered() {
        match posts.iter().find(|p| p.id == placement.post_id) {
            Some(post) => {
                flagged += audit_post(post) as usize;
                audited += 1;
            }
            None => log::warn!("Placement without a matching post: {}", placement.post_id),
        }
    }

    // Posts that were never placed on the board
    for post in posts.iter().filter(|p| board.placement(p.id).is_none()) {
        flagged += audit_post(post) as usize;
        audited += 1;
    }

    println!("{} posts audited, {} with warnings", audited, flagged);
    Ok(())
}

/// Print warnings for one post. Returns true if any were found.
fn audit_post(post: &PostData) -> bool {
    let props: StyleProps = post.style.accessibility_props();
    let warnings = check_accessibility(&props);

    if warnings.is_empty() {
        println!("post {} ({}): ok", post.id, preview(post.content()));
        return false;
    }

    println!("post {} ({}):", post.id, preview(post.content()));
    for warning in &warnings {
        println!("  - {}", warning.message);
    }
    true
}

/// First line of the content, truncated for display.
fn preview(content: &str) -> String {
    const MAX_CHARS: usize = 32;
    let line = content.lines().next().unwrap_or("");
    if line.chars().count() <= MAX_CHARS {
        line.to_string()
    } else {
        let truncated: String = line.chars().take(MAX_CHARS).collect();
        format!("{}...", truncated)
    }
}
