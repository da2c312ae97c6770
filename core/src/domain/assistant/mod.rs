pub mod entities;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

/// Most recent turns forwarded to the model as context.
pub const CONVERSATION_WINDOW: usize = 6;

/// Reply used when the model cannot be reached. The client reads replies
/// aloud, so it always gets something to say.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble answering right now. Could you please ask me again?";
