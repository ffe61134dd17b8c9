//! Beautiful error rendering using ariadne
//!
//! This module provides utilities for rendering Stencil errors with
//! rich formatting, template snippets, and helpful annotations.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Render an error with beautiful formatting to stderr
///
/// # Example
/// ```no_run
/// use stencil::{Engine, EngineOptions, render_error};
///
/// let engine = Engine::new(EngineOptions::default(), |_| {});
///
/// match engine.compile("Hello {{ name") {
///     Err(e) => render_error(&e),
///     Ok(_) => {}
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
///
/// # Example
/// ```no_run
/// use stencil::{Bindings, Engine, EngineOptions, render_error_to_string};
///
/// let engine = Engine::new(EngineOptions::default(), |_| {});
///
/// match engine.render("{{ missing }}", &Bindings::new()) {
///     Err(e) => {
///         let formatted = render_error_to_string(&e);
///         // Use formatted error in UI, logs, etc.
///     }
///     Ok(_) => {}
/// }
/// ```
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_diagnostic(error.template(), &error.to_diagnostic(), writer, use_color)
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
    };

    let mut report = Report::build(kind, ("<template>", diag.span.0.clone()))
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    // Primary label with the main error span
    let color = colors.next();
    report = report.with_label(
        Label::new(("<template>", diag.span.0.clone()))
            .with_message(&diag.message)
            .with_color(color),
    );

    // Related info as secondary labels
    for related in &diag.related {
        let color = colors.next();
        report = report.with_label(
            Label::new(("<template>", related.span.0.clone()))
                .with_message(&related.message)
                .with_color(color),
        );
    }

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    // Render to the writer (need to reborrow to avoid moving)
    report
        .finish()
        .write(("<template>", Source::from(source)), &mut *writer)
}
