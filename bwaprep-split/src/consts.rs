pub const LINES_FLAG: &str = "-l";
pub const NUMERIC_SUFFIX_FLAG: &str = "-d";
pub const STDIN_PATH: &str = "-";
pub const PREFIX_SEPARATOR: char = '.';
pub const READ1_MARKER: &str = "R1";
pub const READ2_MARKER: &str = "R2";
