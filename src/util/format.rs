//! Post message formatting.
//!
//! Renders the survey post's message as Markdown with raw HTML stripped,
//! optionally highlighting `@username` mentions.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Formatting switches for [`format_message`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub at_mentions: bool,
}

/// A run of message text, either plain or an `@mention`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSegment<'a> {
    Plain(&'a str),
    Mention(&'a str),
}

/// Render `message` to HTML.
pub fn format_message(message: &str, options: FormatOptions) -> String {
    let mut md_options = Options::empty();
    md_options.insert(Options::ENABLE_TABLES);
    md_options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut in_code_block = false;
    let mut events = Vec::new();
    for event in Parser::new_ext(message, md_options) {
        match event {
            Event::Html(_) | Event::InlineHtml(_) => {}
            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                events.push(Event::Start(Tag::CodeBlock(kind)));
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                events.push(Event::End(TagEnd::CodeBlock));
            }
            Event::Text(text) if options.at_mentions && !in_code_block => {
                push_mentions(&mut events, &text);
            }
            other => events.push(other),
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

fn push_mentions(events: &mut Vec<Event<'_>>, text: &str) {
    for segment in split_mentions(text) {
        match segment {
            TextSegment::Plain(plain) => events.push(Event::Text(CowStr::from(plain.to_owned()))),
            TextSegment::Mention(mention) => {
                events.push(Event::InlineHtml(CowStr::Borrowed("<span class=\"mention\">")));
                events.push(Event::Text(CowStr::from(mention.to_owned())));
                events.push(Event::InlineHtml(CowStr::Borrowed("</span>")));
            }
        }
    }
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Split `text` into plain runs and `@username` mentions.
///
/// A mention starts at an `@` that is not preceded by a word character and
/// runs over username characters; trailing periods are left as plain text.
pub fn split_mentions(text: &str) -> Vec<TextSegment<'_>> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut prev: Option<char> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((idx, c)) = iter.next() {
        let boundary = prev.is_none_or(|p| !(p.is_alphanumeric() || p == '_'));
        if c == '@' && boundary {
            let name_start = idx + 1;
            let mut name_end = name_start;
            while let Some(&(j, nc)) = iter.peek() {
                if !is_username_char(nc) {
                    break;
                }
                name_end = j + nc.len_utf8();
                iter.next();
            }
            let name = text[name_start..name_end].trim_end_matches('.');
            let mention_end = name_start + name.len();
            if name.is_empty() {
                prev = Some(c);
                continue;
            }
            if plain_start < idx {
                segments.push(TextSegment::Plain(&text[plain_start..idx]));
            }
            segments.push(TextSegment::Mention(&text[idx..mention_end]));
            plain_start = mention_end;
            prev = text[..name_end].chars().next_back();
            continue;
        }
        prev = Some(c);
    }

    if plain_start < text.len() {
        segments.push(TextSegment::Plain(&text[plain_start..]));
    }
    segments
}
