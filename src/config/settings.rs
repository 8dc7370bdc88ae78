use std::path::PathBuf;

use crate::cli::Args;

use super::defaults::*;

/// Runtime settings for report generation
#[derive(Debug, Clone)]
pub struct Settings {
    // Page dimensions
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,

    /// Template pixel to mm ratio
    pub px_to_mm: f32,

    // Typography (in points)
    pub title_font_size: f32,
    pub subtitle_font_size: f32,
    pub body_font_size: f32,
    pub small_font_size: f32,
    pub footer_font_size: f32,

    /// Characters per line when wrapping narrative text
    pub wrap_chars: usize,

    /// City printed when the record has none
    pub default_city: String,

    /// Draw the "PDF #<id>" badge in the top-right corner
    pub show_case_number: bool,

    /// Crest files tried in order (first existing wins)
    pub crest_candidates: Vec<PathBuf>,

    // Attachment merging
    pub merge_enabled: bool,
    pub merge_binary: String,
    pub temp_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_width: LETTER_WIDTH,
            page_height: LETTER_HEIGHT,
            margin_top: MARGIN_TOP,
            margin_bottom: MARGIN_BOTTOM,
            margin_left: MARGIN_LEFT,
            margin_right: MARGIN_RIGHT,

            px_to_mm: PX_TO_MM,

            title_font_size: TITLE_FONT_SIZE,
            subtitle_font_size: SUBTITLE_FONT_SIZE,
            body_font_size: BODY_FONT_SIZE,
            small_font_size: SMALL_FONT_SIZE,
            footer_font_size: FOOTER_FONT_SIZE,

            wrap_chars: WRAP_CHARS,
            default_city: DEFAULT_CITY.to_string(),
            show_case_number: false,

            crest_candidates: DEFAULT_CREST_CANDIDATES
                .iter()
                .map(PathBuf::from)
                .collect(),

            merge_enabled: true,
            merge_binary: DEFAULT_MERGE_BINARY.to_string(),
            temp_dir: std::env::temp_dir(),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let defaults = Self::default();

        Self {
            show_case_number: args.case_number,
            crest_candidates: if args.crest.is_empty() {
                defaults.crest_candidates.clone()
            } else {
                args.crest.clone()
            },
            merge_enabled: !args.no_merge,
            merge_binary: args
                .gs
                .clone()
                .unwrap_or_else(|| defaults.merge_binary.clone()),
            temp_dir: args
                .temp_dir
                .clone()
                .unwrap_or_else(|| defaults.temp_dir.clone()),
            ..defaults
        }
    }

    /// Convert template pixels to mm
    pub fn px(&self, px: f32) -> f32 {
        px * self.px_to_mm
    }

    /// Get the usable content area width
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    pub fn header_row_height(&self) -> f32 {
        self.px(HEADER_ROW_PX)
    }

    pub fn cell_height(&self) -> f32 {
        self.px(CELL_ROW_PX)
    }

    pub fn section_gap(&self) -> f32 {
        self.px(SECTION_GAP_PX)
    }

    pub fn description_box_height(&self) -> f32 {
        self.px(DESCRIPTION_BOX_PX)
    }

    pub fn opinion_box_height(&self) -> f32 {
        self.px(OPINION_BOX_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_geometry() {
        let settings = Settings::default();
        assert!((settings.content_width() - 195.9).abs() < 0.001);
    }

    #[test]
    fn test_default_crest_candidates() {
        let candidates = Settings::default().crest_candidates;
        assert_eq!(candidates.len(), 6);
        assert_eq!(candidates[0], PathBuf::from("assets/images/escudo.png"));
        assert!(candidates.contains(&PathBuf::from("frontend/public/escudo.png")));
        assert_eq!(
            candidates.last(),
            Some(&PathBuf::from("/app/go-backend/assets/images/escudo.png"))
        );
    }

    #[test]
    fn test_pixel_conversion() {
        let settings = Settings::default();
        assert!((settings.px(1.0) - 0.264583).abs() < 1e-6);
        assert!((settings.cell_height() - 5.29166).abs() < 1e-4);
        assert!((settings.header_row_height() - 5.820826).abs() < 1e-4);
        assert!((settings.description_box_height() - 35.718705).abs() < 1e-3);
    }
}
