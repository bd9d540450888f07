//! # lingo-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    HealthResponse, HistoryEntryResponse, LoginRequest, MessageResponse, ReadinessResponse,
    RegisterRequest, TokenResponse, TranslateRequest, TranslationResponse, UserResponse,
};
pub use services::{
    AuthService, HistoryService, ServiceContext, ServiceError, ServiceResult, TranslationService,
};
