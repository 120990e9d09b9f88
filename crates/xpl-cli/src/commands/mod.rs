pub mod dispatch;
pub mod fetch;
pub mod push;
pub mod show;
