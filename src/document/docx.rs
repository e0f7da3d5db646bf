// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! DOCX text extraction
//!
//! A `.docx` file is a zip archive; the body lives in `word/document.xml`.
//! Each `<w:p>` paragraph becomes one line built from its `<w:t>` runs.

use std::io::{Cursor, Read};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::LoadError;

const DOCUMENT_XML: &str = "word/document.xml";

pub(super) fn extract_docx(bytes: &[u8]) -> Result<String, LoadError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut entry = archive.by_name(DOCUMENT_XML)?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| LoadError::Parse(format!("{}: {}", DOCUMENT_XML, e)))?;

    Ok(paragraphs_to_text(&xml))
}

/// Render every paragraph of a WordprocessingML body as a line of text.
pub(super) fn paragraphs_to_text(xml: &str) -> String {
    static PARAGRAPH: OnceLock<Regex> = OnceLock::new();
    static RUN_ITEM: OnceLock<Regex> = OnceLock::new();

    let paragraph = PARAGRAPH.get_or_init(|| {
        Regex::new(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>(.*?)</w:p>").unwrap()
    });
    let run_item = RUN_ITEM.get_or_init(|| {
        Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:tab\s*/>|<w:(?:br|cr)(?:\s[^>]*)?/>")
            .unwrap()
    });

    let mut text = String::new();
    for para in paragraph.captures_iter(xml) {
        if let Some(body) = para.get(1) {
            for item in run_item.captures_iter(body.as_str()) {
                match item.get(1) {
                    Some(run) => text.push_str(&decode_entities(run.as_str())),
                    None if item[0].starts_with("<w:tab") => text.push('\t'),
                    None => text.push('\n'),
                }
            }
        }
        text.push('\n');
    }
    text
}

/// Decode the predefined XML entities and numeric character references.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let entity = &tail[1..end];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                .and_then(char::from_u32),
        };
        match decoded {
            Some(c) => out.push(c),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_lines() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>Hello</w:t></w:r><w:r><w:t xml:space="preserve"> world</w:t></w:r></w:p>
            <w:p w:rsidR="00A1"><w:r><w:t>Second</w:t></w:r></w:p>
        </w:body></w:document>"#;

        assert_eq!(paragraphs_to_text(xml), "Hello world\nSecond\n");
    }

    #[test]
    fn test_empty_paragraph_keeps_line() {
        let xml = "<w:p><w:r><w:t>A</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>B</w:t></w:r></w:p>";
        assert_eq!(paragraphs_to_text(xml), "A\n\nB\n");
    }

    #[test]
    fn test_tabs_and_breaks() {
        let xml = "<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>";
        assert_eq!(paragraphs_to_text(xml), "a\tb\nc\n");
    }

    #[test]
    fn test_paragraph_properties_are_not_paragraphs() {
        let xml = r#"<w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Title</w:t></w:r></w:p>"#;
        assert_eq!(paragraphs_to_text(xml), "Title\n");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("R&amp;D &lt;x&gt;"), "R&D <x>");
        assert_eq!(decode_entities("&#65;&#x42;"), "AB");
        assert_eq!(decode_entities("&unknown; & trailing"), "&unknown; & trailing");
        assert_eq!(decode_entities("plain"), "plain");
    }
}
