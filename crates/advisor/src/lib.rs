//! Generative financial advice for FinBot.
//!
//! This crate provides:
//! - Personas that shape the advice
//! - The `AdviceGenerator` seam used by the API
//! - A Gemini `generateContent` backend
//!
//! Advice generation never fails past this crate: every error becomes a
//! user-displayable message.

pub mod error;
pub mod gemini;
pub mod generator;
pub mod messages;
pub mod persona;

pub use error::AdvisorError;
pub use gemini::GeminiAdvisor;
pub use generator::AdviceGenerator;
pub use persona::Persona;
