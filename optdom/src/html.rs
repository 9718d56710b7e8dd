//! Markup serialization for diagnostics.

use crate::document::Document;
use crate::node::NodeId;

const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

fn escape(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

impl Document {
    /// Serialize `id` and its subtree.
    ///
    /// Inline style is written as a `style` attribute and live option
    /// selectedness as a bare `selected` attribute, so the output reflects
    /// what a user would see rather than the original markup.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(tag) = self.tag_name(id) else {
            for child in self.children(id) {
                self.write_html(*child, out);
            }
            return;
        };

        out.push('<');
        out.push_str(tag);
        for (name, value) in self.attrs(id) {
            if name == "style" || (name == "selected" && tag == "option") {
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape(value, out);
            out.push('"');
        }
        if let Some(style) = self.style(id).filter(|s| !s.is_empty()) {
            out.push_str(" style=\"");
            escape(&style.to_css(), out);
            out.push('"');
        }
        if tag == "option" && self.is_selected(id) {
            out.push_str(" selected");
        }
        out.push('>');

        if VOID_TAGS.contains(&tag) {
            return;
        }

        escape(self.text(id), out);
        for child in self.children(id) {
            self.write_html(*child, out);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}
