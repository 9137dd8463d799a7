//! Usage text for a descriptor set.

use ansi_term::Colour::{Blue, Green, Yellow};
use ansi_term::Style;
use desequencer_core::{ArgumentDescriptor, Registry};

/// Render usage text listing every registered descriptor.
pub fn render_usage(registry: &Registry, program: &str, color: bool) -> String {
    let paint = |style: Style, text: &str| {
        if color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    };

    let mut out = format!(
        "{} {} {}\n",
        paint(Blue.bold(), "Usage:"),
        paint(Green.normal(), program),
        paint(Style::new(), "[options]"),
    );
    if registry.is_empty() {
        return out;
    }

    let rows: Vec<(String, String)> = registry
        .descriptors()
        .map(|d| (signature(d), d.description.clone()))
        .collect();
    let width = rows.iter().map(|(sig, _)| sig.len()).max().unwrap_or(0);

    out.push('\n');
    out.push_str(&paint(Blue.bold(), "Options:"));
    out.push('\n');
    for (sig, description) in rows {
        // pad before painting so escape codes don't skew the columns
        let padded = format!("{:width$}", sig, width = width);
        out.push_str(&format!(
            "  {}  {}\n",
            paint(Yellow.normal(), &padded),
            paint(Style::new().dimmed(), &description),
        ));
    }
    out
}

/// Triggers followed by parcel placeholders, e.g. `-o, --output <VALUE>`.
fn signature(descriptor: &ArgumentDescriptor) -> String {
    let mut sig = descriptor.trigger_display();
    if descriptor.takes_parcels() {
        for _ in 0..descriptor.parcel_count {
            sig.push_str(" <VALUE>");
        }
        if descriptor.is_unbounded {
            sig.push_str("...");
        } else if descriptor.is_array {
            sig.push_str(" (repeatable)");
        }
    }
    sig
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_usage_lists_builtins() {
        let text = render_usage(&Registry::new(), "tool", false);
        assert!(text.starts_with("Usage: tool [options]\n"));
        assert!(text.contains("  -h, --help     Show usage information\n"));
        assert!(text.contains("  -v, --verbose  Increase verbosity\n"));
    }

    #[test]
    fn empty_registry_has_no_options_section() {
        let text = render_usage(&Registry::empty(), "tool", false);
        assert_eq!(text, "Usage: tool [options]\n");
    }

    #[test]
    fn signature_shows_parcels() {
        let single = ArgumentDescriptor::new("o").short('o').long("output").parcels(1);
        assert_eq!(signature(&single), "-o, --output <VALUE>");

        let array = ArgumentDescriptor::new("x").short('x').parcels(1).array(true);
        assert_eq!(signature(&array), "-x <VALUE> (repeatable)");

        let rest = ArgumentDescriptor::new("w").long("rest").parcels(2).unbounded(true);
        assert_eq!(signature(&rest), "--rest <VALUE> <VALUE>...");

        let flag = ArgumentDescriptor::new("z").short('z').unbounded(true);
        assert_eq!(signature(&flag), "-z");
    }

    #[test]
    fn colored_usage_contains_escape_codes() {
        let text = render_usage(&Registry::new(), "tool", true);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("--verbose"));
    }
}
