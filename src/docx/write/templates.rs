//! Fixed-content parts written into every package.
use crate::opc::constants::namespace;

use super::XML_DECL;

/// `word/settings.xml`: compatibility mode and note separator wiring.
pub(crate) fn settings_xml() -> String {
    format!(
        "{decl}<w:settings xmlns:w=\"{ns}\">\
         <w:zoom w:percent=\"100\"/>\
         <w:defaultTabStop w:val=\"720\"/>\
         <w:compat>\
         <w:compatSetting w:name=\"compatibilityMode\" \
         w:uri=\"http://schemas.microsoft.com/office/word\" w:val=\"15\"/>\
         </w:compat>\
         <w:footnotePr><w:footnote w:id=\"0\"/><w:footnote w:id=\"1\"/></w:footnotePr>\
         <w:endnotePr><w:endnote w:id=\"0\"/><w:endnote w:id=\"1\"/></w:endnotePr>\
         </w:settings>",
        decl = XML_DECL,
        ns = namespace::WML_MAIN
    )
}

/// `word/fontTable.xml`: declarations for the fonts the built-in styles
/// and stock numbering definitions reference.
pub(crate) fn font_table_xml() -> String {
    format!(
        "{decl}<w:fonts xmlns:w=\"{ns}\">\
         <w:font w:name=\"Calibri\">\
         <w:panose1 w:val=\"020F0502020204030204\"/>\
         <w:charset w:val=\"00\"/><w:family w:val=\"swiss\"/><w:pitch w:val=\"variable\"/>\
         </w:font>\
         <w:font w:name=\"Symbol\">\
         <w:charset w:val=\"02\"/><w:family w:val=\"roman\"/><w:pitch w:val=\"variable\"/>\
         </w:font>\
         <w:font w:name=\"Courier New\">\
         <w:charset w:val=\"00\"/><w:family w:val=\"modern\"/><w:pitch w:val=\"fixed\"/>\
         </w:font>\
         <w:font w:name=\"Wingdings\">\
         <w:charset w:val=\"02\"/><w:family w:val=\"auto\"/><w:pitch w:val=\"variable\"/>\
         </w:font>\
         </w:fonts>",
        decl = XML_DECL,
        ns = namespace::WML_MAIN
    )
}
