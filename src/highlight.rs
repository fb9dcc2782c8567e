use inksac::prelude::*;

/// Colors the live command line: builtin command words green, external
/// command words cyan, flag arguments yellow.
#[derive(Debug, Clone)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
    builtins: Vec<&'static str>,
}

impl SyntaxHighlighter {
    pub fn new(builtins: &[&'static str]) -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
            builtins: builtins.to_vec(),
        }
    }

    pub fn highlight_command(&self, input: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return input.to_string();
        }

        let mut parts: Vec<String> = input.split_whitespace().map(String::from).collect();
        if parts.is_empty() {
            return input.to_string();
        }

        let command_color = if self.builtins.contains(&parts[0].as_str()) {
            Color::Green
        } else {
            Color::Cyan
        };
        let command_style = Style::builder().foreground(command_color).bold().build();
        parts[0] = parts[0].clone().style(command_style).to_string();

        for part in parts.iter_mut().skip(1) {
            if part.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                *part = part.clone().style(flag_style).to_string();
            }
        }

        parts.join(" ")
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        hint.style(hint_style).to_string()
    }
}
