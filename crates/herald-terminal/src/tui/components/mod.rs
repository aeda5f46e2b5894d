//! # Reusable Components
//!
//! Declarative UI components for the feed shell.

mod author_badge;
mod block_rows;
mod composer;
mod feed;
mod hint_bar;

pub use author_badge::AuthorBadge;
pub use block_rows::{BaseRowView, ButtonRowView, DoubleButtonRowView, TextRowView};
pub use composer::Composer;
pub use feed::FeedView;
pub use hint_bar::{HintBar, KeyHint};
