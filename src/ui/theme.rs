use ratatui::style::Color;

/// Theme color palette defining all colors used in the dashboard.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub on_primary: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Item row colors
    pub row_text: ColorSpec,
    pub low_stock_row: ColorSpec,
    pub in_stock_row: ColorSpec,

    // Status colors
    pub danger: ColorSpec,
    pub warning: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub tab_text: ColorSpec,
}

/// Color specification in RGB.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

impl Theme {
    /// Return the theme for the given appearance.
    ///
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::dark()
        } else {
            Theme::light()
        }
    }

    /// Light appearance: pale background, green accents.
    ///
    pub fn light() -> Self {
        Theme {
            name: "light".to_string(),
            primary: ColorSpec::rgb(0, 128, 0),
            on_primary: ColorSpec::rgb(255, 255, 255),
            text: ColorSpec::rgb(51, 51, 51),
            text_muted: ColorSpec::rgb(153, 153, 153),
            background: ColorSpec::rgb(240, 244, 248),
            surface: ColorSpec::rgb(255, 255, 255),
            row_text: ColorSpec::rgb(34, 34, 34),
            low_stock_row: ColorSpec::rgb(255, 204, 204),
            in_stock_row: ColorSpec::rgb(204, 255, 204),
            danger: ColorSpec::rgb(255, 77, 77),
            warning: ColorSpec::rgb(204, 102, 0),
            border_active: ColorSpec::rgb(0, 128, 0),
            border_normal: ColorSpec::rgb(170, 170, 170),
            tab_text: ColorSpec::rgb(0, 128, 0),
        }
    }

    /// Dark appearance: near-black background, bright green accents.
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark".to_string(),
            primary: ColorSpec::rgb(0, 255, 0),
            on_primary: ColorSpec::rgb(0, 0, 0),
            text: ColorSpec::rgb(238, 238, 238),
            text_muted: ColorSpec::rgb(153, 153, 153),
            background: ColorSpec::rgb(18, 18, 18),
            surface: ColorSpec::rgb(51, 51, 51),
            row_text: ColorSpec::rgb(34, 34, 34),
            low_stock_row: ColorSpec::rgb(255, 204, 204),
            in_stock_row: ColorSpec::rgb(204, 255, 204),
            danger: ColorSpec::rgb(255, 77, 77),
            warning: ColorSpec::rgb(245, 221, 75),
            border_active: ColorSpec::rgb(0, 255, 0),
            border_normal: ColorSpec::rgb(187, 187, 187),
            tab_text: ColorSpec::rgb(204, 204, 204),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode() {
        assert_eq!(Theme::for_mode(false), Theme::light());
        assert_eq!(Theme::for_mode(true), Theme::dark());
        assert_eq!(Theme::default().name, "light");
    }

    #[test]
    fn test_to_color() {
        let spec = ColorSpec::rgb(18, 18, 18);
        assert_eq!(spec.to_color(), Color::Rgb(18, 18, 18));
    }
}
