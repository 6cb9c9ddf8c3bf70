mod resolvers;
mod types;

pub use resolvers::{PostMutation, PostQuery};
pub use types::PostCreateInput;
