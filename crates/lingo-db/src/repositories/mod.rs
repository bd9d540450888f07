//! PostgreSQL repository implementations

mod error;
mod translation;
mod user;

pub use translation::PgTranslationRepository;
pub use user::PgUserRepository;
