mod resolvers;
mod types;

pub use resolvers::{UserMutation, UserQuery};
pub use types::UserCreateInput;
