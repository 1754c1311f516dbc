pub mod auth;
pub mod comment;
pub mod dispatch;
pub mod shared;
pub mod task;
