/// The numbering part: abstract list definitions and their instances.
use crate::common::units::Twips;
use crate::docx::enums::NumberFormat;

/// One level (0-8) of an abstract numbering definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingLevel {
    pub level: u8,
    pub format: NumberFormat,
    /// Level text, e.g. `%1.` for decimal or a glyph for bullets
    pub text: String,
    /// Restart value (`w:start`)
    pub start: u32,
    pub indent_left: Twips,
    /// Hanging indent separating the number from the text
    pub indent_hanging: Twips,
    /// Font forced for bullet glyphs (Symbol, Wingdings)
    pub font: Option<String>,
}

impl NumberingLevel {
    /// A bullet level using the standard glyph rotation Word applies:
    /// Symbol bullets alternate with Courier/Wingdings glyphs per depth.
    pub fn bullet(level: u8) -> Self {
        let (text, font) = match level % 3 {
            0 => ("\u{F0B7}", "Symbol"),
            1 => ("o", "Courier New"),
            _ => ("\u{F0A7}", "Wingdings"),
        };
        Self {
            level,
            format: NumberFormat::Bullet,
            text: text.to_string(),
            start: 1,
            indent_left: Twips(720 * (level as i64 + 1)),
            indent_hanging: Twips(360),
            font: Some(font.to_string()),
        }
    }

    /// A decimal level numbered `%n.` at each depth.
    pub fn decimal(level: u8) -> Self {
        Self {
            level,
            format: NumberFormat::Decimal,
            text: format!("%{}.", level + 1),
            start: 1,
            indent_left: Twips(720 * (level as i64 + 1)),
            indent_hanging: Twips(360),
            font: None,
        }
    }
}

/// An abstract numbering definition (`w:abstractNum`): nine levels of
/// format, text, and indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractNum {
    pub id: u32,
    pub levels: Vec<NumberingLevel>,
}

impl AbstractNum {
    /// Nine-level bullet list definition.
    pub fn bullet(id: u32) -> Self {
        Self {
            id,
            levels: (0..9).map(NumberingLevel::bullet).collect(),
        }
    }

    /// Nine-level decimal list definition.
    pub fn decimal(id: u32) -> Self {
        Self {
            id,
            levels: (0..9).map(NumberingLevel::decimal).collect(),
        }
    }
}

/// A concrete numbering instance (`w:num`) binding a `numId` referenced
/// from paragraphs to an abstract definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Num {
    pub id: u32,
    pub abstract_id: u32,
}

/// The document's numbering tables.
///
/// Empty by default; the part is only written when at least one
/// definition exists. `ensure_bullet` / `ensure_decimal` lazily seed the
/// stock definitions the first time a list paragraph needs them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Numbering {
    pub abstract_nums: Vec<AbstractNum>,
    pub nums: Vec<Num>,
}

impl Numbering {
    pub fn is_empty(&self) -> bool {
        self.abstract_nums.is_empty() && self.nums.is_empty()
    }

    /// Resolve a `numId` to its abstract definition.
    pub fn resolve(&self, num_id: u32) -> Option<&AbstractNum> {
        let num = self.nums.iter().find(|n| n.id == num_id)?;
        self.abstract_nums.iter().find(|a| a.id == num.abstract_id)
    }

    /// The level definition a paragraph reference points at.
    pub fn level(&self, num_id: u32, level: u8) -> Option<&NumberingLevel> {
        self.resolve(num_id)?
            .levels
            .iter()
            .find(|l| l.level == level)
    }

    /// Return the `numId` of a stock bullet definition, creating it on
    /// first use.
    pub fn ensure_bullet(&mut self) -> u32 {
        self.ensure_stock(NumberFormat::Bullet)
    }

    /// Return the `numId` of a stock decimal definition, creating it on
    /// first use.
    pub fn ensure_decimal(&mut self) -> u32 {
        self.ensure_stock(NumberFormat::Decimal)
    }

    fn ensure_stock(&mut self, format: NumberFormat) -> u32 {
        let existing = self.nums.iter().find(|n| {
            self.abstract_nums
                .iter()
                .find(|a| a.id == n.abstract_id)
                .and_then(|a| a.levels.first())
                .is_some_and(|l| l.format == format)
        });
        if let Some(num) = existing {
            return num.id;
        }
        let abstract_id = self
            .abstract_nums
            .iter()
            .map(|a| a.id + 1)
            .max()
            .unwrap_or(0);
        let num_id = self.nums.iter().map(|n| n.id + 1).max().unwrap_or(1);
        let abs = match format {
            NumberFormat::Bullet => AbstractNum::bullet(abstract_id),
            _ => AbstractNum::decimal(abstract_id),
        };
        self.abstract_nums.push(abs);
        self.nums.push(Num {
            id: num_id,
            abstract_id,
        });
        num_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_bullet_is_idempotent() {
        let mut numbering = Numbering::default();
        let a = numbering.ensure_bullet();
        let b = numbering.ensure_bullet();
        assert_eq!(a, b);
        assert_eq!(numbering.abstract_nums.len(), 1);
    }

    #[test]
    fn bullet_and_decimal_get_distinct_ids() {
        let mut numbering = Numbering::default();
        let bullet = numbering.ensure_bullet();
        let decimal = numbering.ensure_decimal();
        assert_ne!(bullet, decimal);
        assert_eq!(
            numbering.level(bullet, 0).map(|l| l.format),
            Some(NumberFormat::Bullet)
        );
        assert_eq!(
            numbering.level(decimal, 2).map(|l| l.text.as_str()),
            Some("%3.")
        );
    }

    #[test]
    fn resolve_missing_num_is_none() {
        let numbering = Numbering::default();
        assert!(numbering.resolve(42).is_none());
    }

    #[test]
    fn bullet_levels_rotate_glyphs() {
        let abs = AbstractNum::bullet(0);
        assert_eq!(abs.levels.len(), 9);
        assert_eq!(abs.levels[0].text, "\u{F0B7}");
        assert_eq!(abs.levels[1].text, "o");
        assert_eq!(abs.levels[2].text, "\u{F0A7}");
        assert_eq!(abs.levels[3].text, "\u{F0B7}");
    }
}
