pub mod file_ops;
pub mod prompt;

#[cfg(test)]
pub mod mem_fs;
