use owo_colors::{OwoColorize, Style};

/// The palette the original tool offered. The migration notice itself
/// only uses `Yellow` and `Bold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    White,
    Bold,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Tint {
    fn style(self) -> Style {
        let style = Style::new();
        match self {
            Tint::White => style.white(),
            Tint::Bold => style.bold(),
            Tint::Black => style.black(),
            Tint::Red => style.red(),
            Tint::Green => style.green(),
            Tint::Yellow => style.yellow(),
            Tint::Blue => style.blue(),
            Tint::Magenta => style.magenta(),
            Tint::Cyan => style.cyan(),
            Tint::Gray => style.bright_black(),
        }
    }
}

/// Wrap `text` in ANSI escapes when the terminal advertises support;
/// otherwise return it unchanged.
pub fn decorate(text: &str, tint: Tint) -> String {
    styled(text, tint, ansi_capable())
}

// TERM values containing "xterm" are taken as ANSI-capable.
fn ansi_capable() -> bool {
    std::env::var("TERM").is_ok_and(|term| term.contains("xterm"))
}

fn styled(text: &str, tint: Tint, enable_color: bool) -> String {
    if enable_color {
        text.style(tint.style()).to_string()
    } else {
        text.to_string()
    }
}
