//! Question kinds

use serde::{Deserialize, Serialize};

/// Kind of question
///
/// Specialized kinds fix the view folder used to render them. They differ
/// only in presentation; validation works the same for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Any template, chosen by the journey author
    #[default]
    Standard,
    /// Document upload (one or more files)
    Attachment,
    /// Yes/no radio pair
    Boolean,
    /// Day, month and year inputs
    Date,
}

impl QuestionKind {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionKind::Standard => "standard",
            QuestionKind::Attachment => "attachment",
            QuestionKind::Boolean => "boolean",
            QuestionKind::Date => "date",
        }
    }

    /// View folder this kind always renders with, if fixed
    pub fn fixed_view_folder(&self) -> Option<&'static str> {
        match self {
            QuestionKind::Standard => None,
            QuestionKind::Attachment => Some("multi-file-upload"),
            QuestionKind::Boolean => Some("boolean"),
            QuestionKind::Date => Some("date"),
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(QuestionKind::Standard),
            "attachment" => Ok(QuestionKind::Attachment),
            "boolean" => Ok(QuestionKind::Boolean),
            "date" => Ok(QuestionKind::Date),
            other => Err(format!("unknown question kind: {}", other)),
        }
    }
}

/// Body field name for one part of a date question (`<field>_<part>`)
pub fn date_part_field(field_name: &str, part: &str) -> String {
    format!("{}_{}", field_name, part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_view_folders() {
        assert_eq!(QuestionKind::Standard.fixed_view_folder(), None);
        assert_eq!(
            QuestionKind::Attachment.fixed_view_folder(),
            Some("multi-file-upload")
        );
        assert_eq!(QuestionKind::Boolean.fixed_view_folder(), Some("boolean"));
        assert_eq!(QuestionKind::Date.fixed_view_folder(), Some("date"));
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [
            QuestionKind::Standard,
            QuestionKind::Attachment,
            QuestionKind::Boolean,
            QuestionKind::Date,
        ] {
            let parsed: QuestionKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("upload".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn test_date_part_field() {
        assert_eq!(date_part_field("start_date", "day"), "start_date_day");
    }
}
