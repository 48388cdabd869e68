mod data;
mod types;

pub use data::{
    chats, completion, config, loaded_at, models, not_implemented, template_chat,
    NOT_IMPLEMENTED,
};
pub use types::{
    ChatRecord, ConfigRecord, DemoError, FeatureFlags, GenerateCompletion, MessageRecord,
    ModelRecord, Role,
};
