#![warn(clippy::uninlined_format_args)]

pub mod keyboard;
pub mod reply_presenter;

pub use reply_presenter::ReplyPresenter;
