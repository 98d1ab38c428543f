//! Forgiving string-level HTML scraping for battery reports.
//!
//! The report is machine generated and flat, so a full HTML parser buys
//! nothing. All lookups are ASCII case-insensitive; lowercasing with
//! `to_ascii_lowercase` keeps byte offsets identical between the original and
//! the lowered copy, which lets us search one and slice the other.

const TD_CLOSE: &str = "</td>";
const H2_CLOSE: &str = "</h2>";
const TABLE_CLOSE: &str = "</table>";

/// Strips tags, decodes entities and collapses whitespace runs.
pub fn clean_text(fragment: &str) -> String {
    let decoded = decode_entities(&strip_tags(fragment));
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let decoded = tail
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_entity(&tail[1..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = match name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => name.strip_prefix('#')?.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn skip_whitespace(s: &str, idx: usize) -> usize {
    let rest = &s[idx..];
    idx + (rest.len() - rest.trim_start().len())
}

/// If an opening `<name ...>` tag starts at `idx`, returns the offset just past its `>`.
fn open_tag_end(lower: &str, idx: usize, name: &str) -> Option<usize> {
    let rest = lower[idx..].strip_prefix('<')?.strip_prefix(name)?;
    match rest.chars().next()? {
        '>' => {}
        c if c.is_ascii_whitespace() => {}
        _ => return None,
    }
    Some(idx + 1 + name.len() + rest.find('>')? + 1)
}

/// Locates the content of the `<td>` following a label cell that ends at `idx`.
///
/// Closing tags wrapping the label (such as `</span>`) are skipped.
fn value_cell_after(lower: &str, mut idx: usize) -> Option<(usize, usize)> {
    loop {
        idx = skip_whitespace(lower, idx);
        let rest = &lower[idx..];
        if rest.starts_with(TD_CLOSE) {
            idx += TD_CLOSE.len();
            break;
        }
        if rest.starts_with("</") {
            idx += rest.find('>')? + 1;
            continue;
        }
        return None;
    }

    idx = skip_whitespace(lower, idx);
    let content_start = open_tag_end(lower, idx, "td")?;
    let content_end = content_start + lower[content_start..].find(TD_CLOSE)?;
    Some((content_start, content_end))
}

/// Returns the cleaned value cell next to the first cell whose text is `label`.
///
/// The label must open its cell (only tags may precede it), so `Name` does not
/// match inside `System Product Name`.
pub fn find_label_value(html: &str, label: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let needle = label.to_ascii_lowercase();
    let mut from = 0;

    while let Some(pos) = lower[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        from = end;

        if !lower[..start].trim_end().ends_with('>') {
            continue;
        }
        if let Some((content_start, content_end)) = value_cell_after(&lower, end) {
            return Some(clean_text(&html[content_start..content_end]));
        }
    }

    None
}

/// Returns the first `<table>...</table>` directly after an `<h2>` titled `title`.
pub fn find_section_table<'a>(html: &'a str, title: &str) -> Option<&'a str> {
    let lower = html.to_ascii_lowercase();
    let needle = title.to_ascii_lowercase();
    let mut from = 0;

    while let Some(pos) = lower[from..].find(&needle) {
        let end = from + pos + needle.len();
        from = end;

        let idx = skip_whitespace(&lower, end);
        if !lower[idx..].starts_with(H2_CLOSE) {
            continue;
        }
        let idx = skip_whitespace(&lower, idx + H2_CLOSE.len());
        if !lower[idx..].starts_with("<table") {
            continue;
        }
        let close = lower[idx..].find(TABLE_CLOSE)?;
        return Some(&html[idx..idx + close + TABLE_CLOSE.len()]);
    }

    None
}

/// Inner HTML of every element named in `names`, in document order.
///
/// Not nesting-aware: content runs to the first closing tag of any listed name.
pub fn elements<'a>(fragment: &'a str, names: &[&str]) -> Vec<&'a str> {
    let lower = fragment.to_ascii_lowercase();
    let mut found = Vec::new();
    let mut idx = 0;

    while let Some(pos) = lower[idx..].find('<') {
        let tag_start = idx + pos;
        let Some(content_start) = names
            .iter()
            .find_map(|name| open_tag_end(&lower, tag_start, name))
        else {
            idx = tag_start + 1;
            continue;
        };

        let Some(content_end) = names
            .iter()
            .filter_map(|name| lower[content_start..].find(&format!("</{}>", name)))
            .min()
            .map(|offset| content_start + offset)
        else {
            break;
        };

        found.push(&fragment[content_start..content_end]);
        idx = content_end;
    }

    found
}
