//! Asset reference rewriting in minified HTML.
//!
//! Textual, not DOM-aware: `href`/`src` attributes anywhere in the document
//! text are rewritten to their `.min.` variants, including lookalike text
//! inside inline scripts or comments. Isolated here so a structural rewrite
//! could replace it without touching the processor.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// The minifier may drop attribute quotes where HTML allows it, so both the
// quoted and unquoted forms are matched.
static CSS_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="[^"]*\.css"|href=[^ \t\r\n"'=<>`]+\.css"#).unwrap());

static JS_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src="[^"]*\.js"|src=[^ \t\r\n"'=<>`]+\.js"#).unwrap());

/// Rewrite `href="*.css"` and `src="*.js"` attributes to `.min.` variants.
///
/// A match that already contains `.min` anywhere in the matched text is left
/// untouched. The check is deliberately coarse: any `.min` substring in the
/// path skips the match, pre-minified or not.
pub fn rewrite_asset_refs(html: &str) -> String {
    let html = swap_extension(&CSS_HREF, html, ".css", ".min.css");
    swap_extension(&JS_SRC, &html, ".js", ".min.js")
}

/// Replace every occurrence of `from` inside each match, unless the match
/// already contains `.min`.
fn swap_extension(re: &Regex, html: &str, from: &str, to: &str) -> String {
    re.replace_all(html, |caps: &Captures<'_>| {
        let matched = &caps[0];
        if matched.contains(".min") {
            matched.to_string()
        } else {
            matched.replace(from, to)
        }
    })
    .into_owned()
}
