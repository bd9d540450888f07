//! Database models with SQLx `FromRow` derives

mod translation;
mod user;

pub use translation::TranslationModel;
pub use user::UserModel;
