use html_escape::{encode_double_quoted_attribute, encode_text};
use scraper::{ElementRef, Node, Selector};
use url::Url;

/// Elements that never carry readable content.
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "iframe", "svg", "canvas", "button", "select",
    "input", "textarea", "head",
];

/// Elements reproduced as-is in HTML output. Anything else is unwrapped.
const KEPT_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "blockquote", "pre", "code", "em",
    "strong", "b", "i", "u", "s", "sub", "sup", "figure", "figcaption", "table", "thead", "tbody",
    "tr", "th", "td", "dl", "dt", "dd", "hr",
];

const VOID_TAGS: &[&str] = &["hr"];

const PARAGRAPH_TAGS: &[&str] = &[
    "p", "div", "section", "article", "main", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol",
    "blockquote", "pre", "table", "figure", "header", "footer", "dl", "hr",
];

const LINE_TAGS: &[&str] = &["li", "tr", "dt", "dd", "figcaption", "br"];

/// Serializes an element subtree as cleaned HTML or plain text.
pub(crate) struct Renderer<'a> {
    pub remove: &'a [Selector],
    pub include_images: bool,
    pub base_url: Option<&'a Url>,
}

impl Renderer<'_> {
    pub fn html(&self, root: ElementRef<'_>) -> String {
        let mut out = String::new();
        self.html_children(root, &mut out);
        out.trim().to_string()
    }

    pub fn text(&self, root: ElementRef<'_>) -> String {
        let mut buf = TextBuffer::default();
        self.text_children(root, &mut buf);
        buf.finish()
    }

    fn is_skipped(&self, el: ElementRef<'_>) -> bool {
        SKIPPED_TAGS.contains(&el.value().name()) || self.remove.iter().any(|s| s.matches(&el))
    }

    fn resolve(&self, link: &str) -> Option<String> {
        let link = link.trim();
        if link.is_empty() || link.starts_with("javascript:") {
            return None;
        }
        match self.base_url {
            Some(base) => base.join(link).ok().map(String::from),
            None => Some(link.to_string()),
        }
    }

    fn html_children(&self, el: ElementRef<'_>, out: &mut String) {
        for child in el.children() {
            match child.value() {
                Node::Text(text) => out.push_str(&encode_text(&**text)),
                Node::Element(_) => {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        self.html_element(child_el, out);
                    }
                }
                _ => {}
            }
        }
    }

    fn html_element(&self, el: ElementRef<'_>, out: &mut String) {
        if self.is_skipped(el) {
            return;
        }

        let name = el.value().name();
        match name {
            "img" => {
                if !self.include_images {
                    return;
                }
                let Some(src) = el.value().attr("src").and_then(|s| self.resolve(s)) else {
                    return;
                };
                out.push_str("<img src=\"");
                out.push_str(&encode_double_quoted_attribute(&src));
                out.push('"');
                if let Some(alt) = el.value().attr("alt") {
                    out.push_str(" alt=\"");
                    out.push_str(&encode_double_quoted_attribute(alt));
                    out.push('"');
                }
                out.push('>');
            }
            "br" => out.push_str("<br>"),
            "a" => match el.value().attr("href").and_then(|h| self.resolve(h)) {
                Some(href) => {
                    out.push_str("<a href=\"");
                    out.push_str(&encode_double_quoted_attribute(&href));
                    out.push_str("\">");
                    self.html_children(el, out);
                    out.push_str("</a>");
                }
                None => self.html_children(el, out),
            },
            tag if VOID_TAGS.contains(&tag) => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
            }
            tag if KEPT_TAGS.contains(&tag) => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                self.html_children(el, out);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            _ => self.html_children(el, out),
        }
    }

    fn text_children(&self, el: ElementRef<'_>, buf: &mut TextBuffer) {
        for child in el.children() {
            match child.value() {
                Node::Text(text) => buf.push_text(text),
                Node::Element(_) => {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        self.text_element(child_el, buf);
                    }
                }
                _ => {}
            }
        }
    }

    fn text_element(&self, el: ElementRef<'_>, buf: &mut TextBuffer) {
        if self.is_skipped(el) {
            return;
        }

        let name = el.value().name();
        let brk = if PARAGRAPH_TAGS.contains(&name) {
            Break::Paragraph
        } else if LINE_TAGS.contains(&name) {
            Break::Line
        } else {
            Break::None
        };

        buf.request(brk);
        self.text_children(el, buf);
        buf.request(brk);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
enum Break {
    #[default]
    None,
    Space,
    Line,
    Paragraph,
}

/// Whitespace-collapsing text accumulator.
#[derive(Default)]
struct TextBuffer {
    out: String,
    pending: Break,
}

impl TextBuffer {
    fn request(&mut self, brk: Break) {
        if !self.out.is_empty() {
            self.pending = self.pending.max(brk);
        }
    }

    fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_whitespace() {
                self.request(Break::Space);
                continue;
            }
            match self.pending {
                Break::None => {}
                Break::Space => self.out.push(' '),
                Break::Line => self.out.push('\n'),
                Break::Paragraph => self.out.push_str("\n\n"),
            }
            self.pending = Break::None;
            self.out.push(c);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}
