//! Blog Handlers
//!
//! HTTP handlers for posts and comments under `/api`. Every handler here
//! runs behind the `authenticate` middleware and reads the caller through
//! the `AuthUser` extractor. Mutating routes on an existing post or comment
//! are additionally wrapped in the owner-or-admin guard by the router.
//!
//! # Module Structure
//!
//! ```text
//! blog/
//! ├── mod.rs       - Module exports
//! ├── types.rs     - Request bodies
//! ├── posts.rs     - /api/posts handlers
//! └── comments.rs  - comment handlers
//! ```

/// Request bodies
pub mod types;

/// Post handlers
pub mod posts;

/// Comment handlers
pub mod comments;

pub use types::{CreateCommentRequest, CreatePostRequest, UpdateCommentRequest, UpdatePostRequest};
