mod builder;

use crate::{
    bpmn::{AnalysisDocument, BPMN_NS},
    error::{
        Error, MULTIPLE_ROOTS, NO_ROOT_ELEMENT, TEXT_OUTSIDE_ROOT, UNEXPECTED_EOF,
        UNMATCHED_END_TAG,
    },
};
use builder::DocumentBuilder;
use log::debug;
use quick_xml::{
    NsReader,
    encoding::Decoder,
    events::{BytesStart, Event},
    name::{Namespace, ResolveResult},
};
use std::{collections::BTreeMap, fmt::Display};

const BOM: char = '\u{feff}';

/// Parse BPMN XML text. Elements are matched by namespace URI, never by prefix.
pub fn read_bpmn(xml: &str) -> Result<AnalysisDocument, Error> {
    let xml = xml.strip_prefix(BOM).unwrap_or(xml);
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let decoder = reader.decoder();
    let mut builder = DocumentBuilder::default();
    let mut roots = 0;

    loop {
        let (ns, event) = reader.read_resolved_event().map_err(malformed)?;
        match event {
            Event::Start(start) | Event::Empty(start)
                if builder.depth() == 0 && roots > 0 =>
            {
                debug!(
                    "Second root element {}",
                    String::from_utf8_lossy(start.name().as_ref())
                );
                return Err(Error::MalformedXml(MULTIPLE_ROOTS.into()));
            }
            Event::Start(start) => {
                roots += usize::from(builder.depth() == 0);
                open(&mut builder, &ns, &start, decoder)?;
            }
            Event::Empty(start) => {
                roots += usize::from(builder.depth() == 0);
                open(&mut builder, &ns, &start, decoder)?;
                builder.close()?;
            }
            Event::End(_) => {
                if builder.depth() == 0 {
                    return Err(Error::MalformedXml(UNMATCHED_END_TAG.into()));
                }
                builder.close()?;
            }
            Event::Text(_) | Event::CData(_) | Event::GeneralRef(_) if builder.depth() == 0 => {
                return Err(Error::MalformedXml(TEXT_OUTSIDE_ROOT.into()));
            }
            Event::Decl(decl) => {
                if let Some(encoding) = decl.encoding() {
                    let encoding = encoding.map_err(malformed)?;
                    if !is_encoding_name(&encoding) {
                        return Err(Error::MalformedXml(format!(
                            "invalid encoding declaration {:?}",
                            String::from_utf8_lossy(&encoding)
                        )));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if builder.depth() > 0 {
        return Err(Error::MalformedXml(UNEXPECTED_EOF.into()));
    }
    if roots == 0 {
        return Err(Error::MalformedXml(NO_ROOT_ELEMENT.into()));
    }
    builder.finish()
}

fn open(
    builder: &mut DocumentBuilder,
    ns: &ResolveResult,
    start: &BytesStart,
    decoder: Decoder,
) -> Result<(), Error> {
    match ns {
        ResolveResult::Bound(Namespace(ns)) if *ns == BPMN_NS.as_bytes() => {
            builder.open(start.local_name().as_ref(), attributes(start, decoder)?)
        }
        ResolveResult::Unknown(prefix) => Err(Error::MalformedXml(format!(
            "undeclared namespace prefix {:?}",
            String::from_utf8_lossy(prefix)
        ))),
        _ => {
            builder.open_foreign();
            Ok(())
        }
    }
}

// Namespace declarations are dropped. Other keys are kept as written.
fn attributes(start: &BytesStart, decoder: Decoder) -> Result<BTreeMap<String, String>, Error> {
    let mut map = BTreeMap::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(malformed)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attribute
            .decode_and_unescape_value(decoder)
            .map_err(malformed)?;
        map.insert(key, value.into_owned());
    }
    Ok(map)
}

// EncName ::= [A-Za-z] ([A-Za-z0-9._] | '-')*
fn is_encoding_name(name: &[u8]) -> bool {
    match name.split_first() {
        Some((first, rest)) => {
            first.is_ascii_alphabetic()
                && rest
                    .iter()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, b'.' | b'_' | b'-'))
        }
        None => false,
    }
}

fn malformed(error: impl Display) -> Error {
    Error::MalformedXml(error.to_string())
}
