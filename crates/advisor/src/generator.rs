//! The advice generation seam.

use async_trait::async_trait;

use crate::persona::Persona;

/// Produces advice text for a question.
///
/// Implementations always return displayable text. Failures are reported
/// as a message, never as an error.
#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    /// Generates advice for `question` tailored to `persona`.
    async fn generate_advice(&self, question: &str, persona: Persona) -> String;
}
