//! Streaming reader for schedaF catalogue exports.
//!
//! Layout (root element name is not significant):
//!
//! ```text
//! <SCHEDA intestazione="...">
//!   <PARAGRAFO etichetta="CLASSIFICATION">
//!     <SERCD>67680</SERCD>
//!     ...
//!   </PARAGRAFO>
//!   <PARAGRAFO etichetta="PHOTOGRAPHER">
//!     <RIPETIZIONE prog="1"><AUFN>Mario Rossi</AUFN></RIPETIZIONE>
//!   </PARAGRAFO>
//! </SCHEDA>
//! ```
//!
//! The reader only recovers this nesting; interpreting labels and field codes
//! is the flattener's job.

use crate::error::SchedaError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const RECORD_ELEMENT: &str = "SCHEDA";
pub const GROUP_ELEMENT: &str = "PARAGRAFO";
pub const REPETITION_ELEMENT: &str = "RIPETIZIONE";
pub const HEADING_ATTR: &[u8] = b"intestazione";
pub const LABEL_ATTR: &[u8] = b"etichetta";
pub const INDEX_ATTR: &[u8] = b"prog";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub heading: Option<String>,
    pub paragraphs: Vec<RawParagraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParagraph {
    pub label: String,
    pub fields: Vec<RawField>,
    pub repetitions: Vec<RawRepetition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRepetition {
    /// The `prog` attribute as written in the source.
    pub prog: Option<String>,
    pub fields: Vec<RawField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub code: String,
    pub text: String,
}

pub fn read_records_from_path(path: &Path) -> Result<Vec<RawRecord>, SchedaError> {
    let file = File::open(path).map_err(|source| SchedaError::Source {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(BufReader::new(file))
}

pub fn read_records_from_str(xml: &str) -> Result<Vec<RawRecord>, SchedaError> {
    read_records(xml.as_bytes())
}

pub fn read_records<R: BufRead>(input: R) -> Result<Vec<RawRecord>, SchedaError> {
    // Text is kept untrimmed: field values are hashed exactly as written.
    let mut reader = Reader::from_reader(input);

    let mut buf = Vec::new();
    let mut state = ReaderState::default();
    let mut records = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| SchedaError::Xml {
                position: reader.buffer_position(),
                source,
            })?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let empty = matches!(event, Event::Empty(_));
                state
                    .open(e, empty, &mut records)
                    .map_err(|source| SchedaError::Xml {
                        position: reader.buffer_position(),
                        source,
                    })?;
            }
            Event::Text(ref e) => {
                let text = e.unescape().map_err(|source| SchedaError::Xml {
                    position: reader.buffer_position(),
                    source,
                })?;
                state.text(&text);
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                state.text(&String::from_utf8_lossy(&bytes));
            }
            Event::End(_) => state.close(&mut records),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = state.innermost_open() {
        return Err(SchedaError::Truncated(open.to_string()));
    }

    Ok(records)
}

// ============================================================================
// Reader state
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Record,
    Paragraph,
    Repetition,
    Field,
    Other,
}

#[derive(Debug, Default)]
struct ReaderState {
    stack: Vec<Frame>,
    record: Option<RawRecord>,
    paragraph: Option<RawParagraph>,
    repetition: Option<RawRepetition>,
    field: Option<RawField>,
}

impl ReaderState {
    fn open(
        &mut self,
        e: &BytesStart<'_>,
        empty: bool,
        records: &mut Vec<RawRecord>,
    ) -> Result<(), quick_xml::Error> {
        let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();

        let frame = if self.field.is_some() {
            // Markup nested inside a field value: keep its text, drop the tags.
            Frame::Other
        } else if self.record.is_none() {
            if name == RECORD_ELEMENT {
                self.record = Some(RawRecord {
                    heading: attribute(e, HEADING_ATTR)?,
                    paragraphs: Vec::new(),
                });
                Frame::Record
            } else {
                Frame::Other
            }
        } else if self.paragraph.is_none() {
            if name == GROUP_ELEMENT {
                self.paragraph = Some(RawParagraph {
                    label: attribute(e, LABEL_ATTR)?.unwrap_or_default(),
                    ..RawParagraph::default()
                });
                Frame::Paragraph
            } else {
                Frame::Other
            }
        } else if self.repetition.is_none() && name == REPETITION_ELEMENT {
            self.repetition = Some(RawRepetition {
                prog: attribute(e, INDEX_ATTR)?,
                fields: Vec::new(),
            });
            Frame::Repetition
        } else {
            self.field = Some(RawField {
                code: name,
                text: String::new(),
            });
            Frame::Field
        };

        if empty {
            self.finish(frame, records);
        } else {
            self.stack.push(frame);
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if let Some(field) = self.field.as_mut() {
            field.text.push_str(text);
        }
    }

    fn close(&mut self, records: &mut Vec<RawRecord>) {
        if let Some(frame) = self.stack.pop() {
            self.finish(frame, records);
        }
    }

    fn finish(&mut self, frame: Frame, records: &mut Vec<RawRecord>) {
        match frame {
            Frame::Record => {
                if let Some(record) = self.record.take() {
                    records.push(record);
                }
            }
            Frame::Paragraph => {
                if let (Some(paragraph), Some(record)) = (self.paragraph.take(), self.record.as_mut())
                {
                    record.paragraphs.push(paragraph);
                }
            }
            Frame::Repetition => {
                if let (Some(repetition), Some(paragraph)) =
                    (self.repetition.take(), self.paragraph.as_mut())
                {
                    paragraph.repetitions.push(repetition);
                }
            }
            Frame::Field => {
                if let Some(field) = self.field.take() {
                    if let Some(repetition) = self.repetition.as_mut() {
                        repetition.fields.push(field);
                    } else if let Some(paragraph) = self.paragraph.as_mut() {
                        paragraph.fields.push(field);
                    }
                }
            }
            Frame::Other => {}
        }
    }

    fn innermost_open(&self) -> Option<&'static str> {
        if self.field.is_some() {
            Some("field")
        } else if self.repetition.is_some() {
            Some(REPETITION_ELEMENT)
        } else if self.paragraph.is_some() {
            Some(GROUP_ELEMENT)
        } else if self.record.is_some() {
            Some(RECORD_ELEMENT)
        } else {
            None
        }
    }
}

/// Value of `key`, unescaped. Every attribute is checked, so malformed or
/// duplicated attributes fail even when they follow the one asked for.
fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, quick_xml::Error> {
    let mut found = None;
    for attr in e.attributes() {
        let attr = attr?;
        if found.is_none() && attr.key.as_ref() == key {
            found = Some(attr.unescape_value()?.into_owned());
        }
    }
    Ok(found)
}
