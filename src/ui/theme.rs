use ratatui::style::Color;

// Focus primaries
pub const TAGS_PRIMARY: Color = Color::Magenta;
pub const PROJECTS_PRIMARY: Color = Color::Cyan;
pub const DETAIL_PRIMARY: Color = Color::Blue;

// Content highlighting
pub const TAG: Color = Color::Yellow;
pub const LINK: Color = Color::LightBlue;
pub const SECTION_HEADING: Color = Color::Cyan;

// Border colors
pub const BORDER_DEFAULT: Color = Color::White;
pub const BORDER_FILTERED: Color = Color::Magenta;

// Text colors
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_ON_ACCENT: Color = Color::Black;

// Status banner
pub const STATUS_BG: Color = Color::Yellow;

// Glyphs
pub const GLYPH_CURSOR: &str = "→";
pub const GLYPH_BULLET: &str = "•";
pub const GLYPH_SCROLL_UP: &str = "▲";
pub const GLYPH_SCROLL_DOWN: &str = "▼";
pub const GLYPH_SCROLL_BOTH: &str = "▲▼";

// Labels
pub const TITLE_APP: &str = " folio ";
pub const TITLE_HELP: &str = " Keybindings ";
pub const LABEL_FILTER_HEADER: &str = "Filter by tags";
pub const LABEL_FILTERED_BY: &str = "Filtered by: ";
pub const LABEL_CLEAR_HINT: &str = "  (c to clear)";
pub const MSG_NO_MATCHES: &str = "No projects match the selected tags.";
pub const MSG_EMPTY_CATALOG: &str = "The catalog is empty.";
pub const MSG_NO_TAGS: &str = "No tags in this catalog.";

// Layout
pub const DETAIL_POPUP_PERCENT_X: u16 = 75;
pub const DETAIL_POPUP_PERCENT_Y: u16 = 80;
pub const HELP_POPUP_PERCENT_X: u16 = 60;
pub const HELP_POPUP_PERCENT_Y: u16 = 70;
pub const LIST_INDENT: usize = 2;
