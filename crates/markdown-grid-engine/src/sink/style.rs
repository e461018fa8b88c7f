//! Per-document style resolution.
//!
//! A [`StyleSheet`] carries the user-tunable values. [`StyleContext::new`]
//! turns every [`LogicalStyle`] into a [`ResolvedStyle`] once, and then answers
//! font questions for individual formatted runs.

use std::collections::HashMap;

use crate::parsing::{FormattedRun, TextScanner};

use super::logical::{FrameMask, LogicalStyle};

/// Latin font for code.
pub const CODE_ASCII_FONT: &str = "Consolas";
/// Wide-script font for code, also the base font of code blocks.
pub const CODE_WIDE_FONT: &str = "Meiryo";
const CODE_BLOCK_SIZE: u16 = 10;

pub const CODE_FILL: Rgb = Rgb(232, 232, 232);
pub const QUOTE_BAR: Rgb = Rgb(0, 112, 192);
pub const INLINE_CODE_COLOR: Rgb = Rgb(180, 0, 0);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderLine {
    #[default]
    None,
    Hair,
    Thin,
    Thick,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Font {
    pub name: String,
    pub size: u16,
    pub bold: bool,
    pub color: Option<Rgb>,
}

impl Font {
    fn new(name: &str, size: u16) -> Self {
        Self {
            name: name.to_string(),
            size,
            bold: false,
            color: None,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Borders {
    pub top: BorderLine,
    pub bottom: BorderLine,
    pub left: BorderLine,
    pub right: BorderLine,
    pub left_color: Option<Rgb>,
}

/// Concrete formatting for one logical style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub font: Font,
    pub fill: Option<Rgb>,
    pub borders: Borders,
    pub vertical_align: VerticalAlign,
    pub wrap: bool,
}

/// The user-tunable part of the look.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    pub font_name: String,
    pub h1_size: u16,
    pub h2_size: u16,
    pub h3_size: u16,
    pub normal_size: u16,
    pub vertical_align: VerticalAlign,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            font_name: "Yu Gothic".to_string(),
            h1_size: 16,
            h2_size: 14,
            h3_size: 12,
            normal_size: 10,
            vertical_align: VerticalAlign::Center,
        }
    }
}

/// A piece of a cell's text with the font it is shown in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSpan {
    pub text: String,
    pub font: Font,
}

/// Resolved styles for one document.
#[derive(Debug)]
pub struct StyleContext {
    sheet: StyleSheet,
    resolved: HashMap<LogicalStyle, ResolvedStyle>,
    fallback: ResolvedStyle,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new(StyleSheet::default())
    }
}

impl StyleContext {
    pub fn new(sheet: StyleSheet) -> Self {
        let resolved = LogicalStyle::all()
            .map(|style| (style, resolve(&sheet, style)))
            .collect();
        let fallback = resolve(&sheet, LogicalStyle::Normal);
        Self {
            sheet,
            resolved,
            fallback,
        }
    }

    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    pub fn resolve(&self, style: LogicalStyle) -> &ResolvedStyle {
        self.resolved.get(&style).unwrap_or(&self.fallback)
    }

    /// Fonts for the runs of a cell styled `style`.
    ///
    /// Inside code blocks and for inline code, text is split into Latin and
    /// wide-script pieces so each gets a font that has its glyphs.
    pub fn font_spans(&self, style: LogicalStyle, runs: &[FormattedRun]) -> Vec<FontSpan> {
        let base = &self.resolve(style).font;
        let mut spans = vec![];
        for run in runs {
            if style.is_code() {
                push_script_split(&mut spans, &run.text, base.size, false, None);
            } else if run.code {
                push_script_split(
                    &mut spans,
                    &run.text,
                    base.size,
                    run.bold || base.bold,
                    Some(INLINE_CODE_COLOR),
                );
            } else {
                let font = if run.bold { base.clone().bold() } else { base.clone() };
                spans.push(FontSpan {
                    text: run.text.clone(),
                    font,
                });
            }
        }
        spans
    }
}

fn push_script_split(
    spans: &mut Vec<FontSpan>,
    text: &str,
    size: u16,
    bold: bool,
    color: Option<Rgb>,
) {
    for (piece, ascii) in TextScanner::script_runs(text) {
        let name = if ascii { CODE_ASCII_FONT } else { CODE_WIDE_FONT };
        spans.push(FontSpan {
            text: piece.to_string(),
            font: Font {
                name: name.to_string(),
                size,
                bold,
                color,
            },
        });
    }
}

fn resolve(sheet: &StyleSheet, style: LogicalStyle) -> ResolvedStyle {
    let text_font = |size| Font::new(&sheet.font_name, size);
    let plain = |font| ResolvedStyle {
        font,
        fill: None,
        borders: Borders::default(),
        vertical_align: sheet.vertical_align,
        wrap: false,
    };

    match style {
        LogicalStyle::Heading1 => plain(text_font(sheet.h1_size).bold()),
        LogicalStyle::Heading2 => plain(text_font(sheet.h2_size).bold()),
        LogicalStyle::Heading3 => plain(text_font(sheet.h3_size).bold()),
        LogicalStyle::Heading4 => plain(text_font(sheet.normal_size).bold()),
        LogicalStyle::Normal | LogicalStyle::Bullet | LogicalStyle::ListItem => {
            plain(text_font(sheet.normal_size))
        }
        LogicalStyle::CodeBlock => ResolvedStyle {
            fill: Some(CODE_FILL),
            ..plain(Font::new(CODE_WIDE_FONT, CODE_BLOCK_SIZE))
        },
        LogicalStyle::CodeFrame(mask) => {
            let edge = |e: FrameMask| {
                if mask.contains(e) {
                    BorderLine::Thin
                } else {
                    BorderLine::None
                }
            };
            ResolvedStyle {
                fill: Some(CODE_FILL),
                borders: Borders {
                    top: edge(FrameMask::TOP),
                    bottom: edge(FrameMask::BOTTOM),
                    left: edge(FrameMask::LEFT),
                    right: edge(FrameMask::RIGHT),
                    left_color: None,
                },
                ..plain(Font::new(CODE_WIDE_FONT, CODE_BLOCK_SIZE))
            }
        }
        LogicalStyle::HorizontalRule => ResolvedStyle {
            borders: Borders {
                bottom: BorderLine::Thin,
                ..Borders::default()
            },
            ..plain(text_font(sheet.normal_size))
        },
        LogicalStyle::TableHeader => ResolvedStyle {
            borders: Borders {
                bottom: BorderLine::Thin,
                ..Borders::default()
            },
            ..plain(text_font(sheet.normal_size).bold())
        },
        LogicalStyle::TableBody => ResolvedStyle {
            borders: Borders {
                bottom: BorderLine::Hair,
                ..Borders::default()
            },
            ..plain(text_font(sheet.normal_size))
        },
        LogicalStyle::TableBodyLastRow => plain(text_font(sheet.normal_size)),
        LogicalStyle::QuoteBody => ResolvedStyle {
            fill: Some(CODE_FILL),
            ..plain(text_font(sheet.normal_size))
        },
        LogicalStyle::QuoteLeft => ResolvedStyle {
            fill: Some(CODE_FILL),
            borders: Borders {
                left: BorderLine::Thick,
                left_color: Some(QUOTE_BAR),
                ..Borders::default()
            },
            ..plain(text_font(sheet.normal_size))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx() -> StyleContext {
        StyleContext::default()
    }

    #[test]
    fn headings_are_bold_at_their_sizes() {
        let ctx = ctx();
        assert_eq!(ctx.resolve(LogicalStyle::Heading1).font.size, 16);
        assert_eq!(ctx.resolve(LogicalStyle::Heading3).font.size, 12);
        let h4 = &ctx.resolve(LogicalStyle::Heading4).font;
        assert!(h4.bold);
        assert_eq!(h4.size, 10);
        assert!(!ctx.resolve(LogicalStyle::Normal).font.bold);
    }

    #[test]
    fn code_frame_borders_follow_mask() {
        let ctx = ctx();
        let style = ctx.resolve(LogicalStyle::CodeFrame(FrameMask::from_edges(
            true, false, true, false,
        )));
        assert_eq!(style.borders.top, BorderLine::Thin);
        assert_eq!(style.borders.left, BorderLine::Thin);
        assert_eq!(style.borders.bottom, BorderLine::None);
        assert_eq!(style.borders.right, BorderLine::None);
        assert_eq!(style.fill, Some(CODE_FILL));
        assert_eq!(style.font.name, CODE_WIDE_FONT);
    }

    #[test]
    fn quote_left_has_blue_bar() {
        let style = ctx().resolve(LogicalStyle::QuoteLeft).clone();
        assert_eq!(style.borders.left, BorderLine::Thick);
        assert_eq!(style.borders.left_color, Some(QUOTE_BAR));
        assert_eq!(style.fill, Some(CODE_FILL));
    }

    #[test]
    fn sheet_values_flow_into_every_style() {
        let ctx = StyleContext::new(StyleSheet {
            font_name: "Noto Sans".to_string(),
            normal_size: 11,
            vertical_align: VerticalAlign::Top,
            ..StyleSheet::default()
        });
        let normal = ctx.resolve(LogicalStyle::TableBody);
        assert_eq!(normal.font, Font::new("Noto Sans", 11));
        assert_eq!(normal.vertical_align, VerticalAlign::Top);
    }

    #[test]
    fn inline_code_splits_by_script_in_red() {
        let spans = ctx().font_spans(
            LogicalStyle::Normal,
            &[FormattedRun::plain("x "), FormattedRun::code("ab値")],
        );
        let summary: Vec<_> = spans
            .iter()
            .map(|s| (s.text.as_str(), s.font.name.as_str(), s.font.color))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("x ", "Yu Gothic", None),
                ("ab", CODE_ASCII_FONT, Some(INLINE_CODE_COLOR)),
                ("値", CODE_WIDE_FONT, Some(INLINE_CODE_COLOR)),
            ]
        );
    }

    #[test]
    fn inline_code_in_bold_heading_is_bold() {
        let spans = ctx().font_spans(LogicalStyle::Heading2, &[FormattedRun::code("x")]);
        assert!(spans[0].font.bold);
        assert_eq!(spans[0].font.size, 14);
    }

    #[test]
    fn code_block_text_has_no_colour() {
        let spans = ctx().font_spans(LogicalStyle::CodeBlock, &[FormattedRun::plain("a 値")]);
        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.font.color.is_none()));
    }

    #[test]
    fn bold_run_uses_bold_base_font() {
        let spans = ctx().font_spans(LogicalStyle::Bullet, &[FormattedRun::bold("b")]);
        assert!(spans[0].font.bold);
        assert_eq!(spans[0].font.name, "Yu Gothic");
    }
}
