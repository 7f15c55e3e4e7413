//! Cosmetic page variants. Themes change colors, CSS, and heading text only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Color, Style};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Blue title, card panel, styled download button
    #[default]
    Card,
    /// Neutral page and palette
    Plain,
}

/// Plot colors for one theme.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub histogram: Style,
    pub kde: Style,
    pub theoretical: Style,
    pub cdf: Style,
    pub marker: Style,
    pub background: Color,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Card => Palette {
                histogram: Style::default().color(Color::SKY_BLUE).opacity(0.75),
                kde: Style::default().color(Color::SKY_BLUE).size(1.0),
                theoretical: Style::default().color(Color::RED),
                cdf: Style::default().color(Color::GREEN),
                marker: Style::default().color(Color::RED),
                background: Color::WHITE,
            },
            Theme::Plain => Palette {
                histogram: Style::default().color(Color::hex(0x4c72b0)).opacity(0.6),
                kde: Style::default().color(Color::hex(0x4c72b0)).size(1.0),
                theoretical: Style::default().color(Color::hex(0xdd8452)),
                cdf: Style::default().color(Color::hex(0x55a868)),
                marker: Style::default().color(Color::hex(0xc44e52)),
                background: Color::WHITE,
            },
        }
    }

    /// Section heading, decorated per theme.
    pub fn heading(&self, section: Section) -> &'static str {
        match (self, section) {
            (Theme::Card, Section::Title) => "📊 Normal Distribution Visualizer",
            (Theme::Card, Section::Inputs) => "🔢 Input Parameters",
            (Theme::Card, Section::Plot) => "📊 Normal Distribution Plot",
            (Theme::Card, Section::Statistics) => "📌 Data Statistics",
            (Theme::Card, Section::Probability) => "📉 Probability Calculator",
            (Theme::Card, Section::Cdf) => "📈 Cumulative Distribution Function (CDF)",
            (Theme::Card, Section::Download) => "📂 Download Data",
            (Theme::Plain, Section::Title) => "Normal Distribution Visualizer",
            (Theme::Plain, Section::Inputs) => "Input Parameters",
            (Theme::Plain, Section::Plot) => "Normal Distribution Plot",
            (Theme::Plain, Section::Statistics) => "Data Statistics",
            (Theme::Plain, Section::Probability) => "Probability Calculator",
            (Theme::Plain, Section::Cdf) => "Cumulative Distribution Function (CDF)",
            (Theme::Plain, Section::Download) => "Download Data",
        }
    }

    pub fn download_label(&self) -> &'static str {
        match self {
            Theme::Card => "⬇️ Download Data as CSV",
            Theme::Plain => "Download Data as CSV",
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Theme::Card => CARD_CSS,
            Theme::Plain => PLAIN_CSS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Title,
    Inputs,
    Plot,
    Statistics,
    Probability,
    Cdf,
    Download,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Card => write!(f, "card"),
            Theme::Plain => write!(f, "plain"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "card" => Ok(Theme::Card),
            "plain" => Ok(Theme::Plain),
            other => Err(format!("unknown theme: {other} (expected card or plain)")),
        }
    }
}

const BASE_CSS: &str = r#"
body { margin: 0; display: flex; min-height: 100vh; }
aside { width: 18rem; padding: 1.5rem; box-sizing: border-box; }
aside label { display: block; margin-top: 1rem; font-size: 0.9rem; }
aside input { width: 100%; }
aside output { float: right; font-variant-numeric: tabular-nums; }
main { flex: 1; padding: 2rem; max-width: 60rem; }
figure { margin: 0 0 1.5rem 0; }
figure svg { max-width: 100%; height: auto; }
code { font-size: 1rem; }
"#;

const CARD_CSS: &str = r#"
body { background-color: #f5f7fa; font-family: 'Segoe UI', sans-serif; color: black; }
aside { background-color: #eaf2f8; border-radius: 10px; margin: 1rem; color: black; }
main { background-color: #ffffff; border-radius: 10px; margin: 1rem;
       box-shadow: 0px 4px 15px rgba(0, 0, 0, 0.1); }
h1 { color: #2e86de; text-align: center; }
aside label, aside output { color: #2e4053; }
.success { background: #e8f5e9; color: #1b5e20; padding: 0.75rem 1rem; border-radius: 8px; font-weight: bold; }
a.download { display: inline-block; background-color: #2e86de; color: white; font-weight: bold;
             border-radius: 8px; padding: 10px 20px; text-decoration: none; transition: 0.3s; }
a.download:hover { background-color: #1b4f72; transform: scale(1.02); }
"#;

const PLAIN_CSS: &str = r#"
body { background-color: #ffffff; font-family: sans-serif; color: #262730; }
aside { background-color: #f0f2f6; }
.success { background: #f0f2f6; padding: 0.75rem 1rem; }
a.download { display: inline-block; border: 1px solid #c0c4cc; padding: 6px 14px;
             color: inherit; text-decoration: none; }
"#;

/// Shared layout rules followed by the theme's own rules.
pub fn stylesheet(theme: Theme) -> String {
    format!("{BASE_CSS}{}", theme.css())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("card".parse::<Theme>().unwrap(), Theme::Card);
        assert_eq!("PLAIN".parse::<Theme>().unwrap(), Theme::Plain);
        assert!("neon".parse::<Theme>().is_err());
        assert_eq!(Theme::Plain.to_string(), "plain");
    }

    #[test]
    fn test_card_palette_matches_classic_colors() {
        let p = Theme::Card.palette();
        assert_eq!(p.theoretical.color, Color::RED);
        assert_eq!(p.cdf.color, Color::GREEN);
        assert_eq!(p.histogram.color, Color::SKY_BLUE);
    }

    #[test]
    fn test_headings_differ_only_in_decoration() {
        for s in [Section::Plot, Section::Cdf, Section::Download] {
            assert!(Theme::Card.heading(s).ends_with(Theme::Plain.heading(s)));
        }
    }
}
