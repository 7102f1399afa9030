pub const ALN_CMD: &str = "aln";
pub const SAMSE_CMD: &str = "samse";
pub const SAMPE_CMD: &str = "sampe";
