//! Small standalone helpers: string substitution, file text I/O, hashing
//! and timestamps

pub mod datetime;
pub mod file;
pub mod hash;
pub mod string;

pub use datetime::now_time_str;
pub use file::{find_files, find_sub_dirs, file_list, read_text, replace_text_in_file, write_text};
pub use hash::md5_string;
pub use string::{parse_pairs, replace_by_dict, str_to_int_list};
