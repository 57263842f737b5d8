//! Parameter types for Fizzy MCP tools
//!
//! Each struct is both the tool's input schema (via `JsonSchema`) and the
//! target of argument coercion (via `Deserialize`). Non-`Option` fields are the
//! tool's required parameters.

mod board;
mod card;
mod column;
mod comment;
mod notification;
mod step;
mod user;

pub use board::*;
pub use card::*;
pub use column::*;
pub use comment::*;
pub use notification::*;
pub use step::*;
pub use user::*;
