/* CONFIG */
pub const DEFAULT_SCRIPT: &str = "scripts/face.txt";
pub const DEFAULT_PICTURE_DIMENSIONS: (usize, usize) = (500, 500);
pub const DEFAULT_MAX_COLOR: usize = 255;
pub const DEFAULT_BACKGROUND_COLOR: (usize, usize, usize) = WHITE;
pub const DEFAULT_FOREGROUND_COLOR: (usize, usize, usize) = BLUE;
pub const DISPLAY_WINDOW_TITLE: &str = "wireframe";

/* COLORS */
pub const WHITE: (usize, usize, usize) = (255, 255, 255);
pub const BLUE: (usize, usize, usize) = (0, 0, 255);
