/// Visual and behavioral constants.

// --- Warehouse class table (color, symbol size, label) ---
pub const NODE_COLOR_NONE: &str = "#ddd";
pub const NODE_COLOR_SMALL: &str = "red";
pub const NODE_COLOR_MEDIUM: &str = "yellow";
pub const NODE_COLOR_LARGE: &str = "green";

pub const NODE_SIZE_NONE: f64 = 10.0;
pub const NODE_SIZE_SMALL: f64 = 20.0;
pub const NODE_SIZE_MEDIUM: f64 = 30.0;
pub const NODE_SIZE_LARGE: f64 = 40.0;

pub const NODE_LABEL_NONE: &str = "none";
pub const NODE_LABEL_SMALL: &str = "small";
pub const NODE_LABEL_MEDIUM: &str = "medium";
pub const NODE_LABEL_LARGE: &str = "large";

// --- Edge styling ---
pub const EDGE_BASE_COLOR: &str = "#ddd";
pub const EDGE_BASE_WIDTH: f64 = 0.5;
pub const EDGE_EMPHASIS_WIDTH_FACTOR: f64 = 3.0;

// --- Distance -> hue mapping ---
pub const MAX_EDGE_DISTANCE: f64 = 2000.0;
pub const HUE_MAX: f64 = 240.0;

// --- Input vector arity (warehouse levels and resource quantities) ---
pub const VECTOR_LEN: usize = 3;
