//! Model ↔ entity mappers

mod translation;
mod user;
