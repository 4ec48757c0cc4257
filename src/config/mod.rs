#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

pub use storage::LocalStorage;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_INPUT_PATH: &str = "./data.csv";
pub const DEFAULT_NAMES_OUTPUT_PATH: &str = "./output1.txt";
pub const DEFAULT_ADDRESSES_OUTPUT_PATH: &str = "./output2.txt";
