/// Content controls (structured document tags).
use crate::docx::run::Run;

/// The kind of a content control (`w:sdtPr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentControlKind {
    RichText,
    PlainText,
    ComboBox,
    DropDownList,
    DatePicker,
    CheckBox,
    Picture,
}

impl ContentControlKind {
    /// The sdtPr child element name marking this kind, if it has one.
    /// Rich text controls are the unmarked default.
    pub const fn marker_element(self) -> Option<&'static str> {
        match self {
            Self::RichText => None,
            Self::PlainText => Some("w:text"),
            Self::ComboBox => Some("w:comboBox"),
            Self::DropDownList => Some("w:dropDownList"),
            Self::DatePicker => Some("w:date"),
            Self::CheckBox => Some("w14:checkbox"),
            Self::Picture => Some("w:picture"),
        }
    }

    /// Recognize a marker element name seen inside `w:sdtPr`.
    pub fn from_marker(local_name: &str) -> Option<Self> {
        match local_name {
            "text" => Some(Self::PlainText),
            "comboBox" => Some(Self::ComboBox),
            "dropDownList" => Some(Self::DropDownList),
            "date" => Some(Self::DatePicker),
            "checkbox" => Some(Self::CheckBox),
            "picture" => Some(Self::Picture),
            _ => None,
        }
    }
}

/// An inline content control (`w:sdt`).
///
/// The control's visible content is either decomposed display runs or, for
/// structures the model does not decompose, raw markup captured verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentControl {
    pub kind: ContentControlKind,
    /// Machine-readable tag (`w:tag`)
    pub tag: Option<String>,
    /// UI title (`w:alias`)
    pub title: Option<String>,
    /// Display runs inside `w:sdtContent`
    pub runs: Vec<Run>,
    /// Verbatim sdtContent markup when the content was not decomposed
    pub raw_content: Option<String>,
}

impl ContentControl {
    /// Create a rich-text control with a single display run.
    pub fn rich_text(text: impl Into<String>) -> Self {
        Self {
            kind: ContentControlKind::RichText,
            tag: None,
            title: None,
            runs: vec![Run::text(text)],
            raw_content: None,
        }
    }

    /// Set the machine-readable tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the UI title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rich_text_control() {
        let cc = ContentControl::rich_text("placeholder").with_tag("customer_name");
        assert_eq!(cc.kind, ContentControlKind::RichText);
        assert_eq!(cc.tag.as_deref(), Some("customer_name"));
        assert_eq!(cc.runs.len(), 1);
    }

    #[test]
    fn marker_elements_roundtrip() {
        for kind in [
            ContentControlKind::PlainText,
            ContentControlKind::ComboBox,
            ContentControlKind::DropDownList,
            ContentControlKind::DatePicker,
        ] {
            let marker = kind.marker_element().unwrap();
            let local = marker.rsplit(':').next().unwrap();
            assert_eq!(ContentControlKind::from_marker(local), Some(kind));
        }
    }
}
