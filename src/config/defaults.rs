/// Letter page width in mm
pub const LETTER_WIDTH: f32 = 215.9;

/// Letter page height in mm
pub const LETTER_HEIGHT: f32 = 279.4;

/// Top and bottom page margins in mm
pub const MARGIN_TOP: f32 = 8.0;
pub const MARGIN_BOTTOM: f32 = 8.0;

/// Left and right page margins in mm
pub const MARGIN_LEFT: f32 = 10.0;
pub const MARGIN_RIGHT: f32 = 10.0;

/// Template pixel to mm ratio (96 DPI)
pub const PX_TO_MM: f32 = 0.264583;

/// Section header row height in template pixels
pub const HEADER_ROW_PX: f32 = 22.0;

/// Table cell height in template pixels
pub const CELL_ROW_PX: f32 = 20.0;

/// Case description box height in template pixels
pub const DESCRIPTION_BOX_PX: f32 = 135.0;

/// Student and advisor assessment box height in template pixels
pub const OPINION_BOX_PX: f32 = 105.0;

/// Vertical gap between sections in template pixels
pub const SECTION_GAP_PX: f32 = 8.0;

/// Crest size in mm
pub const CREST_WIDTH: f32 = 18.0;
pub const CREST_HEIGHT: f32 = 22.0;

/// Typography (in points)
pub const TITLE_FONT_SIZE: f32 = 13.0;
pub const SUBTITLE_FONT_SIZE: f32 = 11.0;
pub const BODY_FONT_SIZE: f32 = 10.0;
pub const SMALL_FONT_SIZE: f32 = 9.0;
pub const FOOTER_FONT_SIZE: f32 = 8.0;

/// Characters per wrapped line in the text boxes
pub const WRAP_CHARS: usize = 85;

/// City printed when the record leaves it empty
pub const DEFAULT_CITY: &str = "Bogotá D.C.";

/// Default page-concatenation binary
pub const DEFAULT_MERGE_BINARY: &str = "gs";

/// Crest locations tried in order when none is configured
///
/// Relative paths cover running from the service directory and from the
/// repository root; the `/app` paths are the container layout.
pub const DEFAULT_CREST_CANDIDATES: &[&str] = &[
    "assets/images/escudo.png",
    "assets/images/escudo.svg",
    "go-backend/assets/images/escudo.png",
    "frontend/public/escudo.png",
    "/app/assets/images/escudo.png",
    "/app/go-backend/assets/images/escudo.png",
];
