//! Help entry rendering.
//!
//! [`HelpRenderer`] turns one [`ArgumentSpec`] into a colorized, wrapped,
//! alignment-correct help entry, and assembles entries into the
//! `arguments:` / `options:` sections. Rendering is a pure function of the
//! spec, the target width and the color flag; writing the result to a
//! terminal is the caller's job.

use crossterm::terminal;
use itertools::Itertools;
use log::{debug, warn};

use crate::error::{Error, Result};
use crate::palette::Palette;
use crate::spec::{ArgKind, ArgumentSpec, DefaultValue};
use crate::text::{self, Role, Segment};

/// Columns assumed when the terminal cannot report a width.
pub const DEFAULT_WIDTH: usize = 80;

/// Columns each entry is indented under its section heading.
const SECTION_LEAD: usize = 2;

/// Queries the terminal width, falling back to [`DEFAULT_WIDTH`] when the
/// environment cannot report one.
pub fn terminal_width() -> usize {
    match terminal::size() {
        Ok((columns, _)) if columns > 0 => columns as usize,
        _ => {
            warn!("terminal width unavailable, assuming {DEFAULT_WIDTH} columns");
            DEFAULT_WIDTH
        }
    }
}

/// Relabels the conventional section headings of generated help text.
/// Anything else passes through unchanged.
pub fn relabel_heading(heading: &str) -> &str {
    match heading {
        "positional arguments" => "arguments",
        "optional arguments" => "options",
        _ => heading,
    }
}

/// Renders help entries for argument specs.
///
/// The renderer holds presentation configuration only and keeps no state
/// between calls.
pub struct HelpRenderer {
    palette: Palette,
    choice_separator: char,
    default_choice_wrap: (char, char),
    indent_increment: usize,
}

impl Default for HelpRenderer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl HelpRenderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            choice_separator: '/',
            default_choice_wrap: ('[', ']'),
            indent_increment: 2,
        }
    }

    /// Renders the full help entry for one argument, wrapped to `width`
    /// visible columns.
    ///
    /// The entry is the invocation label, the free-text help and the
    /// synthesized annotation, in that order. Continuation lines align
    /// past the label. With color disabled the output is plain text;
    /// with color enabled the same text is overlaid with styles.
    ///
    /// # Errors
    ///
    /// Returns an error for inconsistent specs: an empty choice set, or an
    /// optional argument with no way to name it.
    pub fn render(
        &self,
        spec: &ArgumentSpec,
        width: usize,
        color_enabled: bool,
    ) -> Result<String> {
        debug!("rendering help entry for `{}`", spec.display_name());

        let mut segments = self.invocation_label(spec)?;
        let label_width = text::visible_width(&segments);
        let annotation = self.annotation(spec)?;

        // Switches carry one pad column where the metavar would sit, so
        // their help text starts at the same relative offset as a
        // value-taking option's.
        let mut gap = if spec.is_switch() { "  " } else { " " };
        if let Some(help_text) = spec.help_text.as_deref().filter(|h| !h.is_empty()) {
            segments.push(Segment::plain(gap));
            segments.push(Segment::plain(help_text));
            gap = " ";
        }
        if let Some(annotation) = annotation {
            segments.push(Segment::plain(gap));
            segments.extend(annotation);
        }

        let pad = usize::from(spec.is_switch());
        let indent = label_width + pad + self.indent_increment;
        let lines = text::wrap(&segments, width, indent);

        Ok(lines
            .iter()
            .map(|line| self.emit(line, color_enabled))
            .join("\n"))
    }

    /// Renders all entries grouped into sections: positionals under
    /// `arguments:`, optionals under `options:`, in declaration order.
    /// Empty sections are omitted, and no usage line is produced.
    ///
    /// # Errors
    ///
    /// Returns the first spec inconsistency encountered.
    pub fn render_sections(
        &self,
        specs: &[ArgumentSpec],
        width: usize,
        color_enabled: bool,
    ) -> Result<String> {
        let entry_width = width.saturating_sub(SECTION_LEAD).max(1);
        let lead = " ".repeat(SECTION_LEAD);
        let mut sections: Vec<String> = Vec::new();

        for (kind, default_heading) in [
            (ArgKind::Positional, "positional arguments"),
            (ArgKind::Optional, "optional arguments"),
        ] {
            let entries = specs.iter().filter(|spec| spec.kind == kind);
            let mut section = String::new();
            for spec in entries {
                let entry = self.render(spec, entry_width, color_enabled)?;
                for line in entry.lines() {
                    section.push_str(&lead);
                    section.push_str(line);
                    section.push('\n');
                }
            }
            if !section.is_empty() {
                sections.push(format!("{}:\n{}", relabel_heading(default_heading), section));
            }
        }

        Ok(sections.join("\n"))
    }

    /// Step 1: the invocation label. Option strings are joined by the
    /// separator and share a single trailing metavar instead of repeating
    /// it after every name.
    fn invocation_label(&self, spec: &ArgumentSpec) -> Result<Vec<Segment>> {
        let name = match spec.kind {
            ArgKind::Positional => spec.destination.clone(),
            ArgKind::Optional if spec.names.is_empty() => {
                if spec.destination.is_empty() {
                    return Err(Error::UnnamedArgument);
                }
                spec.destination.clone()
            }
            ArgKind::Optional => spec
                .names
                .iter()
                .join(&self.choice_separator.to_string()),
        };

        let mut segments = vec![Segment::plain(name)];
        if spec.takes_value {
            let metavar = if spec.kind == ArgKind::Positional {
                // A positional shows a placeholder only when it has a
                // typed value; its destination is already the label.
                if spec.type_name.is_empty() {
                    String::new()
                } else {
                    spec.metavar()
                }
            } else {
                spec.metavar()
            };
            if !metavar.is_empty() {
                segments.push(Segment::plain(" "));
                segments.push(Segment::tagged(metavar, Role::Metavar));
            }
        }
        Ok(segments)
    }

    /// Step 2: the trailing annotation, or None when the argument warrants
    /// none (positionals without choices, suppressed defaults).
    fn annotation(&self, spec: &ArgumentSpec) -> Result<Option<Vec<Segment>>> {
        if let Some(choices) = &spec.choices {
            if choices.is_empty() {
                return Err(Error::EmptyChoiceSet(spec.display_name().to_string()));
            }
            return Ok(Some(self.choice_annotation(spec, choices)));
        }

        if spec.kind == ArgKind::Positional {
            // Positionals are always required and never defaulted.
            return Ok(None);
        }

        Ok(match &spec.default {
            _ if spec.required => Some(keyword_annotation("required")),
            DefaultValue::Unset => Some(keyword_annotation("optional")),
            DefaultValue::Value(value) => Some(default_annotation(value)),
            DefaultValue::Suppressed => None,
        })
    }

    /// `({c1/c2/…/cn})` with the default choice wrap-marked, plus the
    /// required/optional suffix for named arguments.
    fn choice_annotation(&self, spec: &ArgumentSpec, choices: &[String]) -> Vec<Segment> {
        let default_position = match &spec.default {
            DefaultValue::Value(value) => choices.iter().position(|choice| choice == value),
            _ => None,
        };
        let (open, close) = self.default_choice_wrap;

        let mut segments = vec![Segment::plain("({")];
        for (index, choice) in choices.iter().enumerate() {
            if index > 0 {
                segments.push(Segment::plain(self.choice_separator.to_string()));
            }
            if default_position == Some(index) {
                segments.push(Segment::plain(open.to_string()));
                segments.push(Segment::tagged(choice.clone(), Role::Default));
                segments.push(Segment::plain(close.to_string()));
            } else {
                segments.push(Segment::tagged(choice.clone(), Role::Choice));
            }
        }
        segments.push(Segment::plain("}"));

        let named = spec.kind == ArgKind::Optional;
        if named && spec.required {
            segments.push(Segment::plain(" "));
            segments.push(Segment::tagged("required", Role::Keyword));
        } else if named && default_position.is_none() {
            segments.push(Segment::plain(" "));
            segments.push(Segment::tagged("optional", Role::Keyword));
        }
        segments.push(Segment::plain(")"));
        segments
    }

    fn emit(&self, line: &[Segment], color_enabled: bool) -> String {
        line.iter()
            .map(|segment| self.palette.paint(segment, color_enabled))
            .collect()
    }
}

fn keyword_annotation(word: &str) -> Vec<Segment> {
    vec![
        Segment::plain("("),
        Segment::tagged(word, Role::Keyword),
        Segment::plain(")"),
    ]
}

fn default_annotation(value: &str) -> Vec<Segment> {
    vec![
        Segment::plain("("),
        Segment::tagged("default", Role::Keyword),
        Segment::plain(": "),
        Segment::tagged(value, Role::Default),
        Segment::plain(")"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_plain(spec: &ArgumentSpec) -> String {
        HelpRenderer::default().render(spec, 80, false).unwrap()
    }

    #[test]
    fn test_relabel_heading() {
        assert_eq!(relabel_heading("positional arguments"), "arguments");
        assert_eq!(relabel_heading("optional arguments"), "options");
        assert_eq!(relabel_heading("subcommands"), "subcommands");
    }

    #[test]
    fn test_option_label_joins_names_with_shared_metavar() {
        let spec = ArgumentSpec::option(&["-n", "--num"], "int").suppress_default();
        assert_eq!(render_plain(&spec), "-n/--num INT");
    }

    #[test]
    fn test_positional_label_uses_destination_and_metavar() {
        let spec = ArgumentSpec::positional("outfile", "str").with_help("output path");
        assert_eq!(render_plain(&spec), "outfile STR output path");
    }

    #[test]
    fn test_untyped_positional_renders_bare_destination() {
        let spec = ArgumentSpec::positional("outfile", "");
        assert_eq!(render_plain(&spec), "outfile");
    }

    #[test]
    fn test_switch_pads_one_extra_column() {
        let spec = ArgumentSpec::switch(&["--verbose"]);
        assert_eq!(render_plain(&spec), "--verbose  (optional)");
    }

    #[test]
    fn test_required_wins_over_default() {
        let spec = ArgumentSpec::option(&["--mode"], "str")
            .with_default("fast")
            .require();
        let rendered = render_plain(&spec);
        assert!(rendered.contains("(required)"));
        assert!(!rendered.contains("default"));
        assert!(!rendered.contains("optional"));
    }

    #[test]
    fn test_unset_default_renders_optional() {
        let spec = ArgumentSpec::option(&["--mode"], "str");
        assert_eq!(render_plain(&spec), "--mode STR (optional)");
    }

    #[test]
    fn test_value_default_renders_default_annotation() {
        let spec = ArgumentSpec::option(&["--mode"], "str").with_default("fast");
        assert_eq!(render_plain(&spec), "--mode STR (default: fast)");
    }

    #[test]
    fn test_suppressed_default_renders_no_annotation() {
        let spec = ArgumentSpec::option(&["--mode"], "str").suppress_default();
        assert_eq!(render_plain(&spec), "--mode STR");
    }

    #[test]
    fn test_choices_with_recognized_default_are_marked() {
        let spec = ArgumentSpec::option(&["-n", "--num"], "int")
            .with_choices(&["1", "2", "3"])
            .with_default("2");
        assert_eq!(render_plain(&spec), "-n/--num INT ({1/[2]/3})");
    }

    #[test]
    fn test_choices_without_recognized_default_render_optional() {
        let spec = ArgumentSpec::option(&["--mode"], "str")
            .with_choices(&["fast", "slow"])
            .with_default("warp");
        assert_eq!(render_plain(&spec), "--mode STR ({fast/slow} optional)");
    }

    #[test]
    fn test_required_choices_render_required_suffix() {
        let spec = ArgumentSpec::option(&["--mode"], "str")
            .with_choices(&["fast", "slow"])
            .require();
        assert_eq!(render_plain(&spec), "--mode STR ({fast/slow} required)");
    }

    #[test]
    fn test_positional_choices_render_bare_set() {
        let spec = ArgumentSpec::positional("mode", "str").with_choices(&["fast", "slow"]);
        assert_eq!(render_plain(&spec), "mode STR ({fast/slow})");
    }

    #[test]
    fn test_empty_choice_set_is_an_error() {
        let spec = ArgumentSpec::option(&["--mode"], "str").with_choices(&[]);
        let result = HelpRenderer::default().render(&spec, 80, false);
        assert!(matches!(result, Err(Error::EmptyChoiceSet(_))));
    }

    #[test]
    fn test_unnamed_optional_is_an_error() {
        let mut spec = ArgumentSpec::option(&[], "str");
        spec.destination = String::new();
        let result = HelpRenderer::default().render(&spec, 80, false);
        assert!(matches!(result, Err(Error::UnnamedArgument)));
    }

    #[test]
    fn test_continuation_lines_align_past_the_label() {
        let spec = ArgumentSpec::option(&["-m", "--mode"], "str")
            .with_help("selects the execution mode used for every run")
            .suppress_default();
        let rendered = HelpRenderer::default().render(&spec, 30, false).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.len() > 1);
        // "-m/--mode STR" is 13 columns; the increment adds 2.
        let indent = " ".repeat(15);
        for &line in &lines[1..] {
            assert!(line.starts_with(&indent));
            assert!(!line[indent.len()..].starts_with(' '));
        }
    }

    #[test]
    fn test_render_sections_groups_and_relabels() {
        let specs = vec![
            ArgumentSpec::positional("infile", "str").with_help("input path"),
            ArgumentSpec::switch(&["--verbose"]).with_help("log more"),
        ];
        let rendered = HelpRenderer::default()
            .render_sections(&specs, 80, false)
            .unwrap();
        assert!(rendered.starts_with("arguments:\n  infile STR input path\n"));
        assert!(rendered.contains("\noptions:\n  --verbose  log more (optional)\n"));
        assert!(!rendered.contains("positional arguments"));
        assert!(!rendered.contains("usage"));
    }

    #[test]
    fn test_render_sections_omits_empty_sections() {
        let specs = vec![ArgumentSpec::switch(&["--verbose"])];
        let rendered = HelpRenderer::default()
            .render_sections(&specs, 80, false)
            .unwrap();
        assert!(!rendered.contains("arguments:"));
        assert!(rendered.starts_with("options:"));
    }
}
