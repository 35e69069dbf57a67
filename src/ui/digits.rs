use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

/// Rows per glyph
pub const GLYPH_HEIGHT: usize = 6;

fn glyph(c: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    let rows = match c {
        '0' => [
            " ██████╗ ",
            "██╔═══██╗",
            "██║   ██║",
            "██║   ██║",
            "╚██████╔╝",
            " ╚═════╝ ",
        ],
        '1' => [" ██╗", "███║", "╚██║", " ██║", " ██║", " ╚═╝"],
        '2' => [
            "██████╗ ",
            "╚════██╗",
            " █████╔╝",
            "██╔═══╝ ",
            "███████╗",
            "╚══════╝",
        ],
        '3' => [
            "██████╗ ",
            "╚════██╗",
            " █████╔╝",
            " ╚═══██╗",
            "██████╔╝",
            "╚═════╝ ",
        ],
        '4' => [
            "██╗  ██╗",
            "██║  ██║",
            "███████║",
            "╚════██║",
            "     ██║",
            "     ╚═╝",
        ],
        '5' => [
            "███████╗",
            "██╔════╝",
            "███████╗",
            "╚════██║",
            "███████║",
            "╚══════╝",
        ],
        '6' => [
            " ██████╗ ",
            "██╔════╝ ",
            "███████╗ ",
            "██╔═══██╗",
            "╚██████╔╝",
            " ╚═════╝ ",
        ],
        '7' => [
            "███████╗",
            "╚════██║",
            "    ██╔╝",
            "   ██╔╝ ",
            "   ██║  ",
            "   ╚═╝  ",
        ],
        '8' => [
            " █████╗ ",
            "██╔══██╗",
            "╚█████╔╝",
            "██╔══██╗",
            "╚█████╔╝",
            " ╚════╝ ",
        ],
        '9' => [
            " █████╗ ",
            "██╔══██╗",
            "╚██████║",
            " ╚═══██║",
            " █████╔╝",
            " ╚════╝ ",
        ],
        ':' => ["   ", "██╗", "╚═╝", "██╗", "╚═╝", "   "],
        _ => return None,
    };
    Some(rows)
}

fn pad_to(row: &str, width: usize) -> String {
    let fill = width.saturating_sub(row.width());
    format!("{row}{}", " ".repeat(fill))
}

/// Render `text` (digits and colons) as block-letter rows. Other characters are skipped.
pub fn render(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();
    let widths: Vec<usize> = glyphs
        .iter()
        .map(|g| g.iter().map(|row| row.width()).max().unwrap_or(0))
        .collect();

    (0..GLYPH_HEIGHT)
        .map(|i| {
            glyphs
                .iter()
                .zip(&widths)
                .map(|(g, w)| pad_to(g[i], *w))
                .join(" ")
        })
        .collect()
}

/// Display width of the rendered block letters
pub fn width(text: &str) -> usize {
    render(text).first().map(|row| row.width()).unwrap_or(0)
}
