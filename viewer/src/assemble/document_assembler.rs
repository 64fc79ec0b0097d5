// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Final document assembly.
//!
//! Runs the whole pipeline for one exchange: compose the preview sections
//! the configured mode selects, highlight them, split/fold/annotate the
//! combined markup, then wrap it with the style block and asset references.
//! Image bodies and oversized bodies take their bypass paths here.

use std::fmt::Write as _;

use super::{image_embed::{embed_image, is_browser_image},
            style_block::build_style_block,
            url_linker::link_urls};
use crate::{annotate::{annotate, gutter_width},
            config::{AssetPaths, Settings},
            exchange::{Exchange, Request, RequestBody, Response, ResponseBody},
            fold::detect_folds,
            format::format_body,
            highlight::{highlight, highlight_protocol},
            markup::{escape_html, split_lines, visible_text}};

/// Shown in place of a request body that is not inline text (a file
/// reference, or absent host capture).
pub const REQUEST_BODY_PLACEHOLDER: &str = "(request body could not be shown)";

/// Shown in place of a binary response body that is not a displayable
/// image.
pub const BINARY_BODY_PLACEHOLDER: &str = "(binary response body could not be shown)";

/// Renders an [`Exchange`] into the final markup document.
///
/// Construction takes the render [`Settings`] and the [`AssetPaths`] of the
/// external stylesheet/fold script; both are read-only afterwards. Each
/// [`ExchangePreview::render`] call is independent and re-entrant.
#[derive(Debug)]
pub struct ExchangePreview {
    settings: Settings,
    assets: AssetPaths,
}

/// How the response body participates in the document.
enum BodyRendering {
    /// Joins the highlighted/split/folded/annotated flow.
    Inline(String),
    /// Large-response highlight bypass: escaped plain text appended after
    /// the annotated part, with no markup tokens of its own.
    PlainText(String),
    /// Image short-circuit: an `<img>` embed appended after the annotated
    /// part.
    Image(String),
    /// Nothing to show.
    Empty,
}

impl ExchangePreview {
    #[must_use]
    pub fn new(settings: Settings, assets: AssetPaths) -> Self {
        Self { settings, assets }
    }

    /// Render the addressed exchange into a self-contained document.
    ///
    /// `None` means there is nothing to render, which is not an error: the
    /// result is the empty string.
    #[must_use]
    pub fn render(&self, maybe_exchange: Option<&Exchange>) -> String {
        let Some(exchange) = maybe_exchange else {
            tracing::debug!("no exchange addressed; rendering empty output");
            return String::new();
        };

        let mode = self.settings.preview_option;
        let response = &exchange.response;

        let body_rendering = if mode.shows_response_body() {
            self.plan_response_body(response)
        } else {
            BodyRendering::Empty
        };

        // Sections that flow through the split/fold/annotate pipeline. They
        // are joined before splitting so line numbers and the gutter width
        // stay uniform across the whole preview.
        let mut sections: Vec<String> = Vec::new();
        if mode.shows_request() {
            self.compose_request_sections(&exchange.request, &mut sections);
        }
        if mode.shows_response_headers() {
            sections.push(highlight_protocol(&response_head_text(response)));
        }
        if let BodyRendering::Inline(markup) = &body_rendering {
            sections.push(markup.clone());
        }

        let combined = sections.join("\n\n");
        let lines = split_lines(&combined);
        let width = gutter_width(lines.len());
        let annotated = if combined.is_empty() {
            String::new()
        } else {
            let plain: Vec<String> =
                lines.iter().map(|it| visible_text(&it.markup)).collect();
            let plain_refs: Vec<&str> = plain.iter().map(String::as_str).collect();
            let fold_ranges = detect_folds(&plain_refs);
            annotate(&lines, &fold_ranges, width)
        };

        let mut body_html = annotated;
        match body_rendering {
            BodyRendering::PlainText(text) => {
                if !body_html.is_empty() {
                    body_html.push_str("\n\n");
                }
                body_html.push_str(&text);
            }
            BodyRendering::Image(embed) => {
                if !body_html.is_empty() {
                    body_html.push_str("\n\n");
                }
                body_html.push_str(&embed);
            }
            BodyRendering::Inline(_) | BodyRendering::Empty => {}
        }

        let body_html = if self.settings.disable_adding_href_link_for_large_response
            && self.is_large_response(response)
        {
            tracing::debug!(
                size_in_bytes = response.body_size(),
                "large response; skipping literal-URL linking"
            );
            body_html
        } else {
            link_urls(&body_html)
        };

        let mut document = String::new();
        _ = writeln!(
            document,
            "<link rel=\"stylesheet\" href=\"{}\">",
            self.assets.stylesheet
        );
        document.push_str(&build_style_block(width, &self.settings));
        document.push('\n');
        document.push_str(&body_html);
        document.push('\n');
        _ = write!(document, "<script src=\"{}\"></script>", self.assets.script);
        document
    }

    /// Decide how the response body renders, applying the image
    /// short-circuit and the large-response highlight bypass.
    fn plan_response_body(&self, response: &Response) -> BodyRendering {
        if let Some(content_type) = response.content_type() {
            if is_browser_image(content_type) {
                tracing::debug!(
                    content_type,
                    "image body; bypassing highlight, splitting, and folding"
                );
                let bytes: &[u8] = match &response.body {
                    ResponseBody::Binary(bytes) => bytes,
                    ResponseBody::Text(text) => text.as_bytes(),
                };
                return BodyRendering::Image(embed_image(content_type, bytes));
            }
        }

        match &response.body {
            ResponseBody::Binary(_) => {
                BodyRendering::Inline(escape_html(BINARY_BODY_PLACEHOLDER))
            }
            ResponseBody::Text(text) if text.is_empty() => BodyRendering::Empty,
            ResponseBody::Text(text) => {
                let formatted = format_body(
                    text,
                    response.content_type(),
                    self.settings
                        .suppress_response_body_content_type_validation_warning,
                );
                if self.settings.disable_highlight_response_body_for_large_response
                    && self.is_large_response(response)
                {
                    tracing::debug!(
                        size_in_bytes = response.body_size(),
                        limit_in_bytes = self.settings.large_response_size_limit_bytes(),
                        "large response; bypassing highlight"
                    );
                    BodyRendering::PlainText(escape_html(&formatted))
                } else {
                    BodyRendering::Inline(highlight(&formatted, response.content_type()))
                }
            }
        }
    }

    /// Request echo: protocol lines, then the request body (or its
    /// placeholder) as its own section.
    fn compose_request_sections(&self, request: &Request, sections: &mut Vec<String>) {
        sections.push(highlight_protocol(&request_head_text(request)));
        match &request.body {
            RequestBody::Text(text) if !text.is_empty() => {
                let formatted = format_body(
                    text,
                    request.content_type(),
                    self.settings
                        .suppress_response_body_content_type_validation_warning,
                );
                sections.push(highlight(&formatted, request.content_type()));
            }
            RequestBody::Text(_) | RequestBody::None => {}
            RequestBody::FileRef(path) => {
                tracing::debug!(
                    path = %path.display(),
                    "request body is a file reference; showing placeholder"
                );
                sections.push(escape_html(REQUEST_BODY_PLACEHOLDER));
            }
        }
    }

    fn is_large_response(&self, response: &Response) -> bool {
        response.body_size() > self.settings.large_response_size_limit_bytes()
    }
}

fn request_head_text(request: &Request) -> String {
    let mut acc = format!("{} {}", request.method, request.url);
    for (name, value) in request.headers.iter() {
        _ = write!(acc, "\n{name}: {value}");
    }
    acc
}

fn response_head_text(response: &Response) -> String {
    let mut acc = format!(
        "HTTP/{} {} {}",
        response.http_version, response.status_code, response.status_message
    );
    for (name, value) in response.headers.iter() {
        _ = write!(acc, "\n{name}: {value}");
    }
    acc
}
