use printpdf::Rgb;

/// Standard colors
pub const BLACK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

pub const WHITE: Rgb = Rgb {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    icc_profile: None,
};

/// Section header background (#EFEFEF)
pub const HEADER_GRAY: Rgb = Rgb {
    r: 0.937,
    g: 0.937,
    b: 0.937,
    icc_profile: None,
};

/// Institutional blue for the drawn crest (0, 51, 102)
pub const CREST_BLUE: Rgb = Rgb {
    r: 0.0,
    g: 0.2,
    b: 0.4,
    icc_profile: None,
};

/// Gold for the crest cross (255, 215, 0)
pub const CREST_GOLD: Rgb = Rgb {
    r: 1.0,
    g: 0.843,
    b: 0.0,
    icc_profile: None,
};
