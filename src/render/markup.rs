//! Reply markup transform
//!
//! Bot replies carry lightweight markup: fenced code blocks, inline backtick
//! spans, dash bullets, bare URLs. This module turns a reply into display
//! blocks with a pure, order-sensitive pass: fenced code first, then per
//! line bullets, then inline code, then links, then blank-line paragraphs.
//! User-authored text never goes through this transform; it is rendered
//! literally.

/// An inline span within a paragraph or bullet line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Inline backtick span
    Code(String),
    /// Bare URL, opened externally when activated
    Link(String),
}

/// A display block of a formatted reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    /// Fenced code block body (language tag discarded)
    CodeBlock(String),
    /// Line that began with a dash bullet marker
    Bullet(Vec<Inline>),
}

/// Transform reply text into display blocks.
pub fn format_reply(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut rest = text;

    // Fenced code blocks are carved out first so nothing inside them is
    // interpreted as bullets, inline code or links.
    while let Some(open) = rest.find("```") {
        let after_open = &rest[open + 3..];

        // The opening fence must be terminated by a newline (anything before
        // it is a language tag) and a closing fence must exist; otherwise
        // the backticks are plain text.
        let Some(body_start) = after_open.find('\n').map(|i| i + 1) else {
            break;
        };
        let Some(close) = after_open[body_start..].find("```") else {
            break;
        };

        push_text_blocks(&mut blocks, &rest[..open]);

        let code = &after_open[body_start..body_start + close];
        blocks.push(Block::CodeBlock(code.trim_end_matches('\n').to_string()));

        rest = &after_open[body_start + close + 3..];
    }

    push_text_blocks(&mut blocks, rest);
    blocks
}

/// Split non-code text into bullet lines and blank-line-delimited paragraphs.
fn push_text_blocks(blocks: &mut Vec<Block>, text: &str) {
    let mut paragraph: Vec<String> = Vec::new();

    let flush = |blocks: &mut Vec<Block>, paragraph: &mut Vec<String>| {
        if !paragraph.is_empty() {
            let spans = parse_inline(&paragraph.join(" "));
            if !spans.is_empty() {
                blocks.push(Block::Paragraph(spans));
            }
            paragraph.clear();
        }
    };

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(blocks, &mut paragraph);
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            flush(blocks, &mut paragraph);
            blocks.push(Block::Bullet(parse_inline(item)));
        } else {
            paragraph.push(trimmed.to_string());
        }
    }

    flush(blocks, &mut paragraph);
}

/// Split a line of text into text, inline-code, and link spans.
fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find('`') {
        match rest[start + 1..].find('`') {
            // Backtick pairs with non-empty content become code spans;
            // anything else stays literal.
            Some(len) if len > 0 => {
                push_linkified(&mut spans, &rest[..start]);
                spans.push(Inline::Code(rest[start + 1..start + 1 + len].to_string()));
                rest = &rest[start + len + 2..];
            }
            Some(_) => {
                push_linkified(&mut spans, &rest[..start + 2]);
                rest = &rest[start + 2..];
            }
            None => break,
        }
    }

    push_linkified(&mut spans, rest);
    spans
}

/// Emit a text run, splitting out bare http(s) URLs as link spans.
fn push_linkified(spans: &mut Vec<Inline>, text: &str) {
    let mut rest = text;

    while let Some(at) = find_url_start(rest) {
        if at > 0 {
            spans.push(Inline::Text(rest[..at].to_string()));
        }
        let end = rest[at..]
            .find(char::is_whitespace)
            .map(|i| at + i)
            .unwrap_or(rest.len());
        spans.push(Inline::Link(rest[at..end].to_string()));
        rest = &rest[end..];
    }

    if !rest.is_empty() {
        spans.push(Inline::Text(rest.to_string()));
    }
}

fn find_url_start(text: &str) -> Option<usize> {
    match (text.find("http://"), text.find("https://")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
