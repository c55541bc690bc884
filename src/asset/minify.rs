//! Minifier adapters for HTML, CSS and JavaScript.
//!
//! Uses minify-html for HTML, lightningcss for CSS and oxc for JavaScript.
//! The engines are opaque collaborators; these adapters only translate
//! their inputs and diagnostics.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use minify_html::Cfg;
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use crate::error::MinifyError;

/// Minify JavaScript source code.
///
/// Any parse diagnostic fails the whole file; there is no partial output.
pub fn minify_js(source: &str) -> Result<String, MinifyError> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        let detail = ret
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(MinifyError::Js(detail));
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Ok(code)
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Result<String, MinifyError> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| MinifyError::Css(e.to_string()))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| MinifyError::Css(e.to_string()))?;
    Ok(result.code)
}

/// Minify HTML with embedded CSS and JS minification enabled.
///
/// The engine collapses whitespace, strips comments and drops redundant
/// attributes as core behavior; it never rejects input.
pub fn minify_html(source: &str) -> String {
    let mut cfg = Cfg::new();
    cfg.minify_css = true;
    cfg.minify_js = true;
    let out = minify_html::minify(source.as_bytes(), &cfg);
    String::from_utf8_lossy(&out).into_owned()
}
