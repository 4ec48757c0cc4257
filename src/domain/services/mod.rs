pub mod address_sorter;
pub mod name_aggregator;
pub mod parser;
pub mod validator;

pub use address_sorter::{sort_by_street_name, street_name_key};
pub use name_aggregator::{aggregate_names, group_and_sort_by_name};
pub use parser::parse_data;
pub use validator::{is_phone_number, is_valid_line, PhoneValidator, DEFAULT_PHONE_PATTERN};
