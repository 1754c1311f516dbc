pub mod auth;
pub mod comment;
pub mod task;

pub use auth::AuthCommands;
pub use comment::CommentCommands;
pub use task::TaskCommands;
