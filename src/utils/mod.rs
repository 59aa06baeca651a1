pub mod environment;
pub mod paths;

pub use environment::get_claude_dir;
pub use paths::{
    encode_path, expand_tilde, format_path_with_tilde, fuzzy_match_encoded_names, is_safe_char,
};
