//! Fixed texts sent to, or returned instead of, the model.

/// System instruction describing the advisor's behavior.
pub const SYSTEM_INSTRUCTION: &str = "You are FinBot, an intelligent and friendly AI financial advisor.\n\
Provide practical and trustworthy financial guidance. \
Include actionable steps, keep it concise, and explain why each suggestion helps. \
Use a polite and supportive tone.";

/// Returned when no API key is configured.
pub const MISSING_API_KEY: &str = "Missing Google API key. Set GOOGLE_API_KEY (or FINBOT__ADVISOR__API_KEY) to enable FinBot advice.";

/// Returned when the model is over quota or unavailable.
pub const OFFLINE_FALLBACK: &str = "FinBot is currently offline (API quota exceeded or unavailable).\n\n\
Here are some general money-saving strategies:\n\
- Track expenses weekly to identify unnecessary spending.\n\
- Apply the 50-30-20 rule: 50% needs, 30% wants, 20% savings.\n\
- Automate savings transfers at the start of each month.\n\
- Cook at home and limit take-outs.\n\
- Avoid impulse purchases: wait 24 hours before buying.\n\
- Set a specific monthly savings goal and monitor progress.";

/// Builds the user turn sent to the model.
#[must_use]
pub fn user_prompt(question: &str, persona: &str) -> String {
    format!("Persona: {persona}\nUser Question: {question}")
}
