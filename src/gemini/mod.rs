pub mod chat;
pub mod core;
pub use self::chat::*;
pub use self::core::*;
