//! Advice personas.

use serde::{Deserialize, Serialize};

/// Who the advice is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persona {
    /// A student.
    Student,
    /// Someone in full-time work.
    #[serde(rename = "Working Professional")]
    WorkingProfessional,
    /// A retiree.
    Retiree,
}

impl Persona {
    /// Every persona, in display order.
    pub const ALL: [Self; 3] = [Self::Student, Self::WorkingProfessional, Self::Retiree];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::WorkingProfessional => "Working Professional",
            Self::Retiree => "Retiree",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|persona| persona.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown persona: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Student", Persona::Student)]
    #[case("working professional", Persona::WorkingProfessional)]
    #[case(" RETIREE ", Persona::Retiree)]
    fn test_from_str(#[case] input: &str, #[case] expected: Persona) {
        assert_eq!(input.parse::<Persona>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_persona() {
        assert!("Investor".parse::<Persona>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(
            serde_json::to_string(&Persona::WorkingProfessional).unwrap(),
            "\"Working Professional\""
        );
        let persona: Persona = serde_json::from_str("\"Retiree\"").unwrap();
        assert_eq!(persona, Persona::Retiree);
    }
}
