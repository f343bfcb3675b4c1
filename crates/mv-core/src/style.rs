//! Deterministic color and line style assignment.
//!
//! The i-th line of a group always gets the same style regardless of how
//! many lines the group has or what data it carries.

/// Named colors used by the strip chart and the motor schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Color {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
    Gray,
    DarkGray,
    LightBlue,
}

impl Color {
    /// sRGB components.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::Blue => [0, 0, 255],
            Color::Green => [0, 128, 0],
            Color::Red => [255, 0, 0],
            Color::Cyan => [0, 191, 191],
            Color::Magenta => [191, 0, 191],
            Color::Yellow => [191, 191, 0],
            Color::Black => [0, 0, 0],
            Color::White => [255, 255, 255],
            Color::Gray => [128, 128, 128],
            Color::DarkGray => [169, 169, 169],
            Color::LightBlue => [173, 216, 230],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesStyle {
    pub color: Color,
    pub line_style: LineStyle,
}

/// Fixed palettes cycled by index.
pub struct SeriesStyleCycle;

impl SeriesStyleCycle {
    pub const COLORS: [Color; 7] = [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Black,
    ];

    // The first two lines are both solid.
    pub const LINE_STYLES: [LineStyle; 5] = [
        LineStyle::Solid,
        LineStyle::Solid,
        LineStyle::Dashed,
        LineStyle::DashDot,
        LineStyle::Dotted,
    ];

    pub fn style(index: usize) -> SeriesStyle {
        SeriesStyle {
            color: Self::COLORS[index % Self::COLORS.len()],
            line_style: Self::LINE_STYLES[index % Self::LINE_STYLES.len()],
        }
    }
}

/// Three-phase coil palette.
pub const PHASE_COLORS: [Color; 3] = [Color::Red, Color::Yellow, Color::Blue];

pub fn phase_color(index: usize) -> Color {
    PHASE_COLORS[index % PHASE_COLORS.len()]
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn style_depends_only_on_index(i in 0usize..10_000) {
            let s = SeriesStyleCycle::style(i);
            prop_assert_eq!(s.color, SeriesStyleCycle::COLORS[i % 7]);
            prop_assert_eq!(s.line_style, SeriesStyleCycle::LINE_STYLES[i % 5]);
            prop_assert_eq!(s, SeriesStyleCycle::style(i + 35));
        }
    }
}
