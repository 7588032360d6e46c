// @module: Markup normalization for timed-text transcripts

/// One scanned markup token.
///
/// The scanner splits the document into opening tags, closing tags and the
/// text between them. Raw tag slices are carried along so a pass can re-emit
/// a tag verbatim when it needs to survive normalization.
#[derive(Debug, PartialEq)]
enum Token<'a> {
    /// An opening tag with its name and the full `<...>` slice
    Open { name: &'a str, raw: &'a str },
    /// A closing tag with its name and the full `</...>` slice
    Close { name: &'a str, raw: &'a str },
    /// Text content between tags
    Text(&'a str),
}

/// Structural wrapper tags that carry no caption content of their own.
const STRUCTURAL_TAGS: [&str; 6] = ["tt", "head", "metadata", "body", "div", "p"];

/// Normalizes raw transcript markup into the minimum structure each
/// downstream converter needs.
///
/// Two independent passes are defined over the same original input: a text
/// pass feeding the plain-text converter and a caption pass feeding the
/// caption extractor. Both are built on the token scanner above rather than
/// chained substring rewrites, so neither pass depends on a prior rewrite
/// having already run.
pub struct MarkupNormalizer;

impl MarkupNormalizer {
    /// Reduce markup to plain prose with speaker labels on their own lines.
    ///
    /// Paragraph closes become newlines, span closes become a single space,
    /// and a paragraph carrying a speaker identifier surrounds that
    /// identifier with newlines so each speaker turn starts its own line.
    /// Every other tag is stripped.
    pub fn text_pass(markup: &str) -> String {
        let mut out = String::with_capacity(markup.len());

        for token in scan(markup) {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Open { name, raw } => {
                    if local_name(name) == "p" {
                        if let Some(speaker) = attribute(raw, "speaker") {
                            out.push('\n');
                            out.push_str(speaker);
                            out.push('\n');
                        }
                    }
                }
                Token::Close { name, .. } => match local_name(name) {
                    "p" => out.push('\n'),
                    "span" => out.push(' '),
                    _ => {}
                },
            }
        }

        out
    }

    /// Reduce markup to one sentence cue per line.
    ///
    /// Word-level spans are unwrapped to their text followed by a space
    /// (word timing detail is discarded), every remaining span close forces
    /// a line break so each sentence cue occupies exactly one line, and
    /// structural wrapper tags are removed entirely. Sentence-level span
    /// tags are re-emitted verbatim for the caption extractor to match.
    /// Empty and whitespace-only lines are dropped.
    pub fn caption_pass(markup: &str) -> String {
        let mut stream = String::with_capacity(markup.len());
        let mut in_word_span = false;

        for token in scan(markup) {
            match token {
                Token::Text(text) => stream.push_str(text),
                Token::Open { name, raw } => {
                    let local = local_name(name);
                    if STRUCTURAL_TAGS.contains(&local) {
                        continue;
                    }
                    if local == "span" && attribute(raw, "unit") == Some("word") {
                        in_word_span = true;
                        continue;
                    }
                    stream.push_str(raw);
                }
                Token::Close { name, raw } => {
                    let local = local_name(name);
                    if STRUCTURAL_TAGS.contains(&local) {
                        continue;
                    }
                    if local == "span" {
                        if in_word_span {
                            in_word_span = false;
                            stream.push(' ');
                        } else {
                            stream.push_str(raw);
                            stream.push('\n');
                        }
                    } else {
                        stream.push_str(raw);
                    }
                }
            }
        }

        let lines: Vec<&str> = stream
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        lines.join("\n")
    }
}

/// Scan markup into a token stream.
///
/// An unterminated trailing `<` is passed through as text rather than
/// swallowed, so best-effort conversion of damaged documents keeps their
/// content.
fn scan(markup: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = markup;

    while let Some(open_at) = rest.find('<') {
        if open_at > 0 {
            tokens.push(Token::Text(&rest[..open_at]));
        }
        let tail = &rest[open_at..];
        let Some(close_at) = tail.find('>') else {
            tokens.push(Token::Text(tail));
            return tokens;
        };

        let raw = &tail[..=close_at];
        let inner = &raw[1..raw.len() - 1];
        if let Some(name) = inner.strip_prefix('/') {
            tokens.push(Token::Close {
                name: name.trim(),
                raw,
            });
        } else {
            let body = inner.strip_suffix('/').unwrap_or(inner);
            let name = body.split_whitespace().next().unwrap_or("");
            tokens.push(Token::Open { name, raw });
        }

        rest = &tail[close_at + 1..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }
    tokens
}

/// Tag or attribute name with any namespace prefix removed
/// (`podcasts:unit` matches as `unit`).
fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

/// Look up an attribute by local name inside a raw opening tag, returning
/// its double-quoted value.
fn attribute<'a>(raw: &'a str, local: &str) -> Option<&'a str> {
    let mut rest = raw;
    while let Some(eq_at) = rest.find("=\"") {
        let name_start = rest[..eq_at]
            .rfind(|c: char| c.is_whitespace())
            .map_or(0, |at| at + 1);
        let name = &rest[name_start..eq_at];

        let value_start = eq_at + 2;
        let value_len = rest[value_start..].find('"')?;
        let value = &rest[value_start..value_start + value_len];

        if local_name(name) == local {
            return Some(value);
        }
        rest = &rest[value_start + value_len + 1..];
    }
    None
}
