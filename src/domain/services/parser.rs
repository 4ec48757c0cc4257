use crate::domain::model::Customer;
use crate::domain::services::validator::is_valid_line;

/// Parses comma separated customer lines, keeping source order.
///
/// Lines that do not split into exactly four fields are skipped without
/// error. Every field is trimmed; no other normalization is applied.
pub fn parse_data<I, S>(lines: I) -> Vec<Customer>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .inspect(|customer| tracing::debug!("Parsed customer\n{}", customer))
        .collect()
}

fn parse_line(line: &str) -> Option<Customer> {
    let fields: Vec<&str> = line.split(',').collect();
    if !is_valid_line(&fields) {
        return None;
    }

    Some(Customer::new(
        fields[0].trim(),
        fields[1].trim(),
        fields[2].trim(),
        fields[3].trim(),
    ))
}
