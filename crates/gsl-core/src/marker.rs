//! Marker classification
//!
//! Recognizes the three customizable-region marker forms inside a single line:
//!
//! - open: `<GSL customizable: NAME>` or `<default GSL customizable: NAME>`
//! - close: `</GSL customizable: NAME>`
//! - empty: `<GSL customizable: NAME />` or `<default GSL customizable: NAME />`
//!
//! Text around the marker on the same line is kept so rewritten markers keep
//! their comment syntax and indentation. Anything that is not exactly one of
//! these forms is a plain line.

use std::sync::OnceLock;

use regex::Regex;

/// Kind of region marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Starts a region with a body
    Open,
    /// Ends the currently open region
    Close,
    /// Self-closing region without a body
    Empty,
}

/// A region marker found in a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Marker kind
    pub kind: MarkerKind,
    /// Region name
    pub name: &'a str,
    /// Whether the marker carries the `default` flag (never set on close markers)
    pub is_default: bool,
    /// Text before the marker on the same line
    pub prefix: &'a str,
    /// Text after the marker on the same line
    pub suffix: &'a str,
}

impl<'a> Marker<'a> {
    /// Render a marker for this region in the same surrounding text
    ///
    /// The `is_default` argument is ignored for close markers.
    pub fn render(&self, kind: MarkerKind, is_default: bool) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            marker_text(kind, self.name, is_default),
            self.suffix
        )
    }
}

/// Classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    /// Ordinary text
    Plain(&'a str),
    /// A line holding a region marker
    Marker(Marker<'a>),
}

/// Classify a line as plain text or a region marker
pub fn classify(line: &str) -> Classified<'_> {
    let Some(caps) = marker_regex().captures(line) else {
        return Classified::Plain(line);
    };
    // group 0 always exists on a successful match
    let Some(whole) = caps.get(0) else {
        return Classified::Plain(line);
    };

    let (kind, name) = if let Some(close) = caps.name("close") {
        (MarkerKind::Close, close.as_str())
    } else if let Some(open) = caps.name("open") {
        let kind = if caps.name("empty").is_some() {
            MarkerKind::Empty
        } else {
            MarkerKind::Open
        };
        (kind, open.as_str())
    } else {
        return Classified::Plain(line);
    };

    Classified::Marker(Marker {
        kind,
        name,
        is_default: caps.name("default").is_some(),
        prefix: &line[..whole.start()],
        suffix: &line[whole.end()..],
    })
}

/// Canonical text of a marker, without surrounding text
pub fn marker_text(kind: MarkerKind, name: &str, is_default: bool) -> String {
    let flag = if is_default { "default " } else { "" };
    match kind {
        MarkerKind::Open => format!("<{}GSL customizable: {}>", flag, name),
        MarkerKind::Close => format!("</GSL customizable: {}>", name),
        MarkerKind::Empty => format!("<{}GSL customizable: {} />", flag, name),
    }
}

fn marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"<(?:(?P<default>default )?GSL customizable: (?P<open>[-\w]+)(?P<empty> /)?>|/GSL customizable: (?P<close>[-\w]+)>)",
        )
        .expect("Invalid marker regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(line: &str) -> Marker<'_> {
        match classify(line) {
            Classified::Marker(m) => m,
            Classified::Plain(_) => panic!("expected a marker in {:?}", line),
        }
    }

    #[test]
    fn test_plain_line() {
        assert_eq!(classify("fn main() {}"), Classified::Plain("fn main() {}"));
        assert_eq!(classify(""), Classified::Plain(""));
    }

    #[test]
    fn test_open_marker() {
        let m = marker("<GSL customizable: body>");
        assert_eq!(m.kind, MarkerKind::Open);
        assert_eq!(m.name, "body");
        assert!(!m.is_default);
        assert_eq!(m.prefix, "");
        assert_eq!(m.suffix, "");
    }

    #[test]
    fn test_default_open_marker_with_surrounding_text() {
        let m = marker("        // <default GSL customizable: method-bar> keep");
        assert_eq!(m.kind, MarkerKind::Open);
        assert_eq!(m.name, "method-bar");
        assert!(m.is_default);
        assert_eq!(m.prefix, "        // ");
        assert_eq!(m.suffix, " keep");
    }

    #[test]
    fn test_close_marker() {
        let m = marker("# </GSL customizable: imports_1>");
        assert_eq!(m.kind, MarkerKind::Close);
        assert_eq!(m.name, "imports_1");
        assert!(!m.is_default);
        assert_eq!(m.prefix, "# ");
    }

    #[test]
    fn test_empty_markers() {
        let m = marker("<GSL customizable: slot />");
        assert_eq!(m.kind, MarkerKind::Empty);
        assert!(!m.is_default);

        let m = marker("/* <default GSL customizable: slot /> */");
        assert_eq!(m.kind, MarkerKind::Empty);
        assert!(m.is_default);
        assert_eq!(m.suffix, " */");
    }

    #[test]
    fn test_malformed_markers_are_plain() {
        for line in [
            "<GSL customizable: two words>",
            "<GSL customizable:body>",
            "<gsl customizable: body>",
            "</default GSL customizable: body>",
            "</GSL customizable: body />",
            "<GSL customizable: body/>",
            "<custom GSL customizable: body>",
            "<GSL customizable: >",
        ] {
            assert_eq!(classify(line), Classified::Plain(line), "{:?}", line);
        }
    }

    #[test]
    fn test_render_keeps_surrounding_text() {
        let m = marker("    // <default GSL customizable: body>");
        assert_eq!(
            m.render(MarkerKind::Open, false),
            "    // <GSL customizable: body>"
        );
        assert_eq!(
            m.render(MarkerKind::Close, true),
            "    // </GSL customizable: body>"
        );
        assert_eq!(
            m.render(MarkerKind::Empty, false),
            "    // <GSL customizable: body />"
        );
    }

    #[test]
    fn test_rendered_markers_classify_back() {
        for kind in [MarkerKind::Open, MarkerKind::Close, MarkerKind::Empty] {
            for is_default in [false, true] {
                let text = marker_text(kind, "round-trip", is_default);
                let m = marker(&text);
                assert_eq!(m.kind, kind);
                assert_eq!(m.name, "round-trip");
                assert_eq!(m.is_default, is_default && kind != MarkerKind::Close);
            }
        }
    }
}
