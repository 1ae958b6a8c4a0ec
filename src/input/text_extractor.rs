//! Text extraction from document byte streams

use crate::error::{CvInsightError, Result};
use crate::input::file_detector::DocumentFormat;
use pulldown_cmark::{Event, Parser, Tag};
use regex::Regex;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// Routes a byte stream to the extractor for its format
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Pdf => PdfExtractor.extract(bytes),
        DocumentFormat::Docx => DocxExtractor.extract(bytes),
        DocumentFormat::Text => PlainTextExtractor.extract(bytes),
        DocumentFormat::Markdown => MarkdownExtractor.extract(bytes),
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            CvInsightError::DocumentExtraction(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

/// Reads the paragraphs of `word/document.xml`, one per line
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let docx_error = |e: &dyn std::fmt::Display| {
            CvInsightError::DocumentExtraction(format!("Failed to read DOCX: {}", e))
        };

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| docx_error(&e))?;
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| docx_error(&e))?
            .read_to_string(&mut xml)?;

        let text_run = Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>").map_err(|e| docx_error(&e))?;

        let paragraphs: Vec<String> = xml
            .split("</w:p>")
            .map(|paragraph| {
                text_run
                    .captures_iter(paragraph)
                    .filter_map(|c| c.get(1))
                    .map(|m| unescape_xml(m.as_str()))
                    .collect::<String>()
            })
            .filter(|paragraph| !paragraph.trim().is_empty())
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let text = String::from_utf8_lossy(bytes);
        Ok(text.trim_start_matches('\u{feff}').to_string())
    }
}

/// Drops markdown syntax, keeping block structure as line breaks
pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let markdown = String::from_utf8_lossy(bytes);
        let mut text = String::new();

        for event in Parser::new(&markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_)) => {
                    text.push('\n')
                }
                _ => {}
            }
        }

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Ok(lines.join("\n"))
    }
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buffer);
            writer
                .start_file("word/document.xml", zip::write::FileOptions::default())
                .unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buffer.into_inner()
    }

    #[test]
    fn test_plain_text_is_lossy_utf8() {
        let text = extract_text(b"\xef\xbb\xbfJean Dupont\n\xff", DocumentFormat::Text).unwrap();
        assert!(text.starts_with("Jean Dupont\n"));
        assert!(text.ends_with('\u{fffd}'));
    }

    #[test]
    fn test_markdown_formatting_is_removed() {
        let markdown = "# Jean Dupont\n\n**Développeur** `Rust`\n\n- Python\n- SQL\n".as_bytes();
        let text = extract_text(markdown, DocumentFormat::Markdown).unwrap();
        assert_eq!(text, "Jean Dupont\nDéveloppeur Rust\nPython\nSQL");
    }

    #[test]
    fn test_docx_paragraphs() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>Jean</w:t></w:r><w:r><w:t xml:space="preserve"> Dupont</w:t></w:r></w:p>
            <w:p><w:r><w:t>R&amp;D chez Orange</w:t></w:r></w:p>
            <w:p></w:p>
        </w:body></w:document>"#;
        let text = extract_text(&docx_bytes(xml), DocumentFormat::Docx).unwrap();
        assert_eq!(text, "Jean Dupont\nR&D chez Orange");
    }

    #[test]
    fn test_invalid_docx() {
        assert!(matches!(
            extract_text(b"not a zip", DocumentFormat::Docx),
            Err(CvInsightError::DocumentExtraction(_))
        ));
        assert!(matches!(
            extract_text(&docx_bytes("<w:document/>")[..], DocumentFormat::Docx),
            Ok(text) if text.is_empty()
        ));
    }
}
