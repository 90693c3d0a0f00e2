//! Marker-based HTML field extraction.
//!
//! The switch management console serves HTML that is neither well formed nor
//! stable across firmware revisions. The only contract that holds is the
//! relative ordering of a handful of marker tokens, so these primitives scan
//! for landmarks directly instead of building a DOM. They tolerate
//! inconsistent attribute quoting and surrounding markup noise, and every
//! miss is reported as `None` rather than an error: callers decide whether a
//! missing field is fatal or just a defaulted reading.

/// Direction of a bounded window search relative to an anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// Search the window after the anchor, first label occurrence wins.
    Forward,
    /// Search the window before the anchor, last label occurrence wins.
    Backward,
}

/// Extract the value of a named hidden form field, tolerant of quote style.
///
/// Finds `name="field"` (double-quoted form first, then single-quoted), then
/// the literal `value` token, then whichever quote character comes next; the
/// value runs to the next occurrence of that same character. The firmware
/// mixes quote styles freely, sometimes within one tag.
pub fn extract_quoted_attribute<'a>(html: &'a str, field_name: &str) -> Option<&'a str> {
    let double = format!("name=\"{}\"", field_name);
    let single = format!("name='{}'", field_name);
    let name_pos = html.find(&double).or_else(|| html.find(&single))?;

    let rest = &html[name_pos..];
    let value_pos = rest.find("value")?;
    let after_value = &rest[value_pos + "value".len()..];

    // The opening delimiter is whichever quote occurs first; the same
    // character is then required to close the value.
    let (open, delim) = match (after_value.find('"'), after_value.find('\'')) {
        (Some(d), Some(s)) if d < s => (d, '"'),
        (Some(d), None) => (d, '"'),
        (_, Some(s)) => (s, '\''),
        (None, None) => return None,
    };

    let value = &after_value[open + 1..];
    let close = value.find(delim)?;
    Some(&value[..close])
}

/// Extract the text of the first `<span>` following a label token, searched
/// within `window_bytes` of `anchor`.
///
/// Backward searches take the label occurrence closest to the anchor (the
/// last one in the window). The span must open and close inside the window.
/// Returned text is trimmed.
pub fn extract_bounded_span<'a>(
    html: &'a str,
    anchor: usize,
    label: &str,
    direction: SearchDirection,
    window_bytes: usize,
) -> Option<&'a str> {
    let window = window_slice(html, anchor, direction, window_bytes)?;
    let label_pos = match direction {
        SearchDirection::Forward => window.find(label)?,
        SearchDirection::Backward => window.rfind(label)?,
    };
    span_text(&window[label_pos..])
}

/// Extract the text between the `>` that closes the tag a label sits in and
/// the following `</span>`, searched within `window_bytes` of `anchor`.
///
/// Some labels (`powClassShow`) name the value-bearing span from inside its
/// own class attribute, so there is no later `<span>` to scan for; the value
/// starts right after the enclosing tag closes. Returned text is trimmed.
pub fn extract_tag_text<'a>(
    html: &'a str,
    anchor: usize,
    label: &str,
    direction: SearchDirection,
    window_bytes: usize,
) -> Option<&'a str> {
    let window = window_slice(html, anchor, direction, window_bytes)?;
    let label_pos = match direction {
        SearchDirection::Forward => window.find(label)?,
        SearchDirection::Backward => window.rfind(label)?,
    };
    let area = &window[label_pos..];
    let gt = area.find('>')?;
    let content = &area[gt + 1..];
    let close = content.find("</span>")?;
    Some(content[..close].trim())
}

/// Extract a cookie's value from a raw header block.
///
/// The value runs from `name=` to the first of `;`, `\r`, `\n`, or end of
/// input.
pub fn extract_cookie_value<'a>(headers: &'a str, cookie_name: &str) -> Option<&'a str> {
    let marker = format!("{}=", cookie_name);
    let pos = headers.find(&marker)?;
    let value = &headers[pos + marker.len()..];
    let end = value
        .find(|c| c == ';' || c == '\r' || c == '\n')
        .unwrap_or(value.len());
    Some(&value[..end])
}

/// Slice the search window around an anchor, clamped to the input and nudged
/// onto char boundaries (a window edge may land inside a multibyte sequence).
fn window_slice(
    html: &str,
    anchor: usize,
    direction: SearchDirection,
    window_bytes: usize,
) -> Option<&str> {
    if anchor > html.len() {
        return None;
    }
    match direction {
        SearchDirection::Forward => {
            let mut end = (anchor + window_bytes).min(html.len());
            while !html.is_char_boundary(end) {
                end -= 1;
            }
            Some(&html[anchor..end])
        }
        SearchDirection::Backward => {
            let mut start = anchor.saturating_sub(window_bytes);
            while !html.is_char_boundary(start) {
                start += 1;
            }
            Some(&html[start..anchor])
        }
    }
}

/// Text of the first `<span ...>` tag in `area`, up to its `</span>`.
fn span_text(area: &str) -> Option<&str> {
    let open = area.find("<span")?;
    let after_open = &area[open..];
    let gt = after_open.find('>')?;
    let content = &after_open[gt + 1..];
    let close = content.find("</span>")?;
    Some(content[..close].trim())
}
