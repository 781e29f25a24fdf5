//! Numbering part parsing.
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::common::error::Result;
use crate::common::units::Twips;
use crate::docx::enums::NumberFormat;
use crate::docx::numbering::{AbstractNum, Num, Numbering, NumberingLevel};

use super::{attr, attr_num};

/// Parse `word/numbering.xml`.
pub(crate) fn parse_numbering(src: &str) -> Result<Numbering> {
    let mut reader = Reader::from_str(src);
    let mut numbering = Numbering::default();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"abstractNum" => {
                    if let Some(id) = attr_num(&e, "abstractNumId") {
                        let levels = parse_levels(&mut reader)?;
                        numbering.abstract_nums.push(AbstractNum { id, levels });
                    } else {
                        let end = e.to_end().into_owned();
                        reader.read_to_end(end.name())?;
                    }
                }
                b"num" => {
                    let num_id = attr_num(&e, "numId");
                    let mut abstract_id = None;
                    loop {
                        match reader.read_event()? {
                            Event::Empty(inner) | Event::Start(inner)
                                if inner.local_name().as_ref() == b"abstractNumId" =>
                            {
                                abstract_id = attr_num(&inner, "val");
                            }
                            Event::End(end) if end.local_name().as_ref() == b"num" => break,
                            Event::Eof => break,
                            _ => {}
                        }
                    }
                    if let (Some(id), Some(abstract_id)) = (num_id, abstract_id) {
                        numbering.nums.push(Num { id, abstract_id });
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(numbering)
}

/// Levels of one `w:abstractNum`, consumed through its end tag.
fn parse_levels(reader: &mut Reader<&[u8]>) -> Result<Vec<NumberingLevel>> {
    let mut levels = Vec::new();
    let mut current: Option<NumberingLevel> = None;
    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"lvl" => {
                    if let Some(level) = current.take() {
                        levels.push(level);
                    }
                    current = Some(NumberingLevel {
                        level: attr_num(e, "ilvl").unwrap_or(0),
                        format: NumberFormat::Decimal,
                        text: String::new(),
                        start: 1,
                        indent_left: Twips(0),
                        indent_hanging: Twips(0),
                        font: None,
                    });
                }
                b"start" => {
                    if let (Some(level), Some(v)) = (&mut current, attr_num(e, "val")) {
                        level.start = v;
                    }
                }
                b"numFmt" => {
                    if let Some(level) = &mut current {
                        if let Some(fmt) =
                            attr(e, "val").and_then(|v| NumberFormat::from_xml(&v))
                        {
                            level.format = fmt;
                        }
                    }
                }
                b"lvlText" => {
                    if let (Some(level), Some(text)) = (&mut current, attr(e, "val")) {
                        level.text = text;
                    }
                }
                b"ind" => {
                    if let Some(level) = &mut current {
                        if let Some(left) = attr_num(e, "left") {
                            level.indent_left = Twips(left);
                        }
                        if let Some(hanging) = attr_num(e, "hanging") {
                            level.indent_hanging = Twips(hanging);
                        }
                    }
                }
                b"rFonts" => {
                    if let Some(level) = &mut current {
                        level.font = attr(e, "ascii").or_else(|| level.font.take());
                    }
                }
                _ => {}
            },
            Event::End(e) if e.local_name().as_ref() == b"abstractNum" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    if let Some(level) = current.take() {
        levels.push(level);
    }
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_definitions_and_instances() {
        let xml = r#"<w:numbering xmlns:w="x">
          <w:abstractNum w:abstractNumId="0">
            <w:lvl w:ilvl="0">
              <w:start w:val="1"/>
              <w:numFmt w:val="bullet"/>
              <w:lvlText w:val="&#xF0B7;"/>
              <w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>
              <w:rPr><w:rFonts w:ascii="Symbol" w:hAnsi="Symbol"/></w:rPr>
            </w:lvl>
            <w:lvl w:ilvl="1">
              <w:numFmt w:val="decimal"/>
              <w:lvlText w:val="%2."/>
            </w:lvl>
          </w:abstractNum>
          <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
        </w:numbering>"#;
        let numbering = parse_numbering(xml).unwrap();
        assert_eq!(numbering.abstract_nums.len(), 1);
        assert_eq!(numbering.nums, vec![Num { id: 1, abstract_id: 0 }]);
        let lvl0 = numbering.level(1, 0).unwrap();
        assert_eq!(lvl0.format, NumberFormat::Bullet);
        assert_eq!(lvl0.text, "\u{F0B7}");
        assert_eq!(lvl0.indent_left, Twips(720));
        assert_eq!(lvl0.font.as_deref(), Some("Symbol"));
        assert_eq!(numbering.level(1, 1).unwrap().text, "%2.");
    }

    #[test]
    fn dangling_instance_is_kept_but_unresolvable() {
        let xml = r#"<w:numbering>
          <w:num w:numId="3"><w:abstractNumId w:val="9"/></w:num>
        </w:numbering>"#;
        let numbering = parse_numbering(xml).unwrap();
        assert_eq!(numbering.nums.len(), 1);
        assert!(numbering.resolve(3).is_none());
    }
}
