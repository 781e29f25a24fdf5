/// Field codes rendered as fldChar instruction sequences.
use std::fmt::Write as FmtWrite;

/// A field code.
///
/// A closed set of variants sharing one instruction-string operation,
/// dispatched by pattern matching. The serializer turns each into a
/// `fldChar begin` / `instrText` / `separate` / placeholder / `end` run
/// sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldCode {
    /// Current page number (`PAGE`)
    Page,
    /// Total page count (`NUMPAGES`)
    NumPages,
    /// Date field with an optional picture format (`DATE \@ "..."`)
    Date { format: Option<String> },
    /// Conditional field (`IF expr1 op expr2 "true" "false"`)
    If {
        left: String,
        operator: String,
        right: String,
        true_text: String,
        false_text: String,
    },
    /// Cross-reference to a bookmark (`REF name`)
    Ref { bookmark: String },
    /// Sequence field (`SEQ identifier`)
    Seq { identifier: String },
    /// Mail-merge field (`MERGEFIELD name`)
    Merge { name: String },
    /// Formula field (`= expression`)
    Formula { expression: String },
}

impl FieldCode {
    /// Render the field instruction string, as it appears inside
    /// `w:instrText`.
    pub fn instruction_text(&self) -> String {
        match self {
            Self::Page => "PAGE".to_string(),
            Self::NumPages => "NUMPAGES".to_string(),
            Self::Date { format } => match format {
                Some(f) => format!("DATE \\@ \"{}\"", f),
                None => "DATE".to_string(),
            },
            Self::If {
                left,
                operator,
                right,
                true_text,
                false_text,
            } => {
                let mut instr = String::with_capacity(32);
                // Infallible: writing into a String cannot fail
                let _ = write!(
                    instr,
                    "IF {} {} {} \"{}\" \"{}\"",
                    left, operator, right, true_text, false_text
                );
                instr
            }
            Self::Ref { bookmark } => format!("REF {}", bookmark),
            Self::Seq { identifier } => format!("SEQ {}", identifier),
            Self::Merge { name } => format!("MERGEFIELD {}", name),
            Self::Formula { expression } => format!("= {}", expression),
        }
    }

    /// Placeholder result text shown before the host recalculates the field.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Page | Self::NumPages | Self::Seq { .. } | Self::Formula { .. } => "1",
            _ => "",
        }
    }

    /// Best-effort recognition of an instruction string parsed back from a
    /// package. Unrecognized instructions return `None`; callers keep the
    /// raw text instead.
    pub fn from_instruction(instr: &str) -> Option<Self> {
        let trimmed = instr.trim();
        let mut words = trimmed.split_whitespace();
        match words.next()? {
            "PAGE" => Some(Self::Page),
            "NUMPAGES" => Some(Self::NumPages),
            "DATE" => {
                let format = trimmed
                    .split_once("\\@")
                    .map(|(_, f)| f.trim().trim_matches('"').to_string())
                    .filter(|f| !f.is_empty());
                Some(Self::Date { format })
            }
            "REF" => Some(Self::Ref {
                bookmark: words.next()?.to_string(),
            }),
            "SEQ" => Some(Self::Seq {
                identifier: words.next()?.to_string(),
            }),
            "MERGEFIELD" => Some(Self::Merge {
                name: words.next()?.to_string(),
            }),
            "=" => Some(Self::Formula {
                expression: trimmed[1..].trim().to_string(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_instruction() {
        assert_eq!(FieldCode::Page.instruction_text(), "PAGE");
        assert_eq!(FieldCode::NumPages.instruction_text(), "NUMPAGES");
    }

    #[test]
    fn date_with_format() {
        let field = FieldCode::Date {
            format: Some("yyyy-MM-dd".to_string()),
        };
        assert_eq!(field.instruction_text(), "DATE \\@ \"yyyy-MM-dd\"");
    }

    #[test]
    fn if_field_renders_operands() {
        let field = FieldCode::If {
            left: "1".to_string(),
            operator: "=".to_string(),
            right: "1".to_string(),
            true_text: "yes".to_string(),
            false_text: "no".to_string(),
        };
        assert_eq!(field.instruction_text(), "IF 1 = 1 \"yes\" \"no\"");
    }

    #[test]
    fn instruction_parse_roundtrip() {
        for field in [
            FieldCode::Page,
            FieldCode::NumPages,
            FieldCode::Ref {
                bookmark: "intro".to_string(),
            },
            FieldCode::Merge {
                name: "FirstName".to_string(),
            },
        ] {
            assert_eq!(
                FieldCode::from_instruction(&field.instruction_text()),
                Some(field)
            );
        }
    }

    #[test]
    fn unknown_instruction_is_none() {
        assert_eq!(FieldCode::from_instruction("TOC \\o \"1-3\""), None);
    }
}
