use std::collections::{BTreeMap, HashMap};

use crate::models::{Attachment, Forum, Post};

/// Owning container for everything extracted from a dump.
///
/// Populated once by the parser, then treated as read-only by the page
/// generator and the renderer. Threads are not stored independently: a thread
/// is the set of posts sharing a `thread_id`, ordered by ascending post id
/// (ids are assigned monotonically in the source, so they double as a
/// chronological proxy; the post with the smallest id originated the thread).
#[derive(Debug, Default)]
pub struct Catalog {
    pub forums: BTreeMap<u32, Forum>,
    pub posts: Vec<Post>,
    pub attachments: HashMap<u32, Attachment>,
    /// thread_id -> indices into `posts`, ascending post id.
    threads: BTreeMap<u32, Vec<usize>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group posts into threads. Called once after all posts are ingested;
    /// safe to call again (rebuilds from scratch).
    pub fn organize_threads(&mut self) {
        self.threads.clear();
        for (idx, post) in self.posts.iter().enumerate() {
            self.threads.entry(post.thread_id).or_default().push(idx);
        }
        for indices in self.threads.values_mut() {
            indices.sort_by_key(|&i| self.posts[i].id);
        }
    }

    /// Iterate threads as (thread_id, posts ordered by ascending id).
    pub fn threads(&self) -> impl Iterator<Item = (u32, Vec<&Post>)> {
        self.threads
            .iter()
            .map(|(&tid, indices)| (tid, indices.iter().map(|&i| &self.posts[i]).collect()))
    }

    /// Posts of one thread, ordered by ascending id. Empty if unknown.
    pub fn thread_posts(&self, thread_id: u32) -> Vec<&Post> {
        self.threads
            .get(&thread_id)
            .map(|indices| indices.iter().map(|&i| &self.posts[i]).collect())
            .unwrap_or_default()
    }

    pub fn thread_count(&self) -> usize {
        self.threads.len()
    }
}
