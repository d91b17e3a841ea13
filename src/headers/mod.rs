pub mod point;
pub mod sample_file_header;
