//! HTML-entity decoding for display names.
//!
//! Names come out of the CMS escaped (`Jan &amp; Piet`, `O&#8217;Brien`).
//! Decoding is injected into graph construction so callers without a use
//! for it can pass [`PassThrough`].

use quick_xml::escape::resolve_html5_entity;

/// Longest reference body scanned for a closing `;`.
const MAX_REFERENCE_LEN: usize = 32;

/// Turns an escaped display string into plain text.
pub trait HtmlDecoder {
    fn decode(&self, raw: &str) -> String;
}

/// Identity decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl HtmlDecoder for PassThrough {
    fn decode(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Decodes numeric character references and HTML5 named entities.
///
/// Each `&...;` reference is resolved on its own; a bare `&` or an
/// unresolvable reference is copied through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityDecoder;

impl HtmlDecoder for EntityDecoder {
    fn decode(&self, raw: &str) -> String {
        if !raw.contains('&') {
            return raw.to_string();
        }

        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;
        while let Some(amp) = rest.find('&') {
            out.push_str(&rest[..amp]);
            let tail = &rest[amp + 1..];
            let resolved = tail
                .char_indices()
                .take(MAX_REFERENCE_LEN + 1)
                .find(|&(_, c)| c == ';' || c == '&' || c.is_whitespace())
                .filter(|&(_, c)| c == ';')
                .and_then(|(end, _)| resolve_reference(&tail[..end]).map(|text| (end, text)));

            match resolved {
                Some((end, text)) => {
                    out.push_str(&text);
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push('&');
                    rest = tail;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Resolve the body of a reference (between `&` and `;`).
fn resolve_reference(body: &str) -> Option<String> {
    if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix(|c: char| c == 'x' || c == 'X') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return char::from_u32(code)
            .filter(|&c| c != '\0')
            .map(String::from);
    }
    resolve_html5_entity(body).map(str::to_string)
}
