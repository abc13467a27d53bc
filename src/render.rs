//! Text rendering of display models

use crate::data::DisplayModel;

/// Width of the label column in normal output
const LABEL_WIDTH: usize = 45;

/// Renders a display model as text
///
/// Quiet output is one `code<TAB>value` line per form and nothing else, for
/// use in scripts. Normal output starts with the header, followed by the
/// translations (if any) and one aligned `label: value` line per form.
pub fn render(model: &DisplayModel, quiet: bool) -> String {
    let mut out = String::new();

    if quiet {
        for line in &model.lines {
            out.push_str(&format!("{}\t{}\n", line.code, line.value));
        }
        return out;
    }

    if !model.header.is_empty() {
        out.push_str(&model.header);
        out.push('\n');
    }

    if !model.translations.is_empty() {
        out.push_str(&format!("  English: {}\n", model.translations.join(", ")));
    }

    for line in &model.lines {
        let label = format!("{}:", line.label);
        out.push_str(&format!("  {:<width$} {}\n", label, line.value, width = LABEL_WIDTH));
    }

    out
}
