//! Shapes of the JSON the Fizzy backend returns
//!
//! Handlers return bodies wrapped in [`Remote`], which hands the backend's
//! JSON back to the caller untouched. The structs here describe what that JSON
//! holds and are what [`Remote::decode`] produces; fields the backend omits
//! decode to their defaults.

pub mod board;
pub mod card;
pub mod column;
pub mod comment;
pub mod common;
pub mod identity;
pub mod notification;
pub mod step;
pub mod tag;

pub use board::Board;
pub use card::Card;
pub use column::Column;
pub use comment::{Comment, CommentBody};
pub use common::{Created, Remote, User};
pub use identity::{Account, Identity};
pub use notification::{Notification, NotificationCard};
pub use step::Step;
pub use tag::Tag;
