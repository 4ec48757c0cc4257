use crate::domain::model::{Customer, NameCount, NameField};
use std::collections::HashMap;

/// Counts first names and last names as two separate groupings.
///
/// A name that appears as both a first and a last name yields two entries.
/// The result is ordered by ascending count, then by name.
pub fn aggregate_names(customers: &[Customer]) -> Vec<NameCount> {
    let mut entries = count_names(customers, NameField::First);
    entries.extend(count_names(customers, NameField::Last));

    entries.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Renders [`aggregate_names`] as `"<name> : <count>"` lines.
pub fn group_and_sort_by_name(customers: &[Customer]) -> Vec<String> {
    aggregate_names(customers)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn count_names(customers: &[Customer], field: NameField) -> Vec<NameCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for customer in customers {
        let name = match field {
            NameField::First => customer.first_name.trim(),
            NameField::Last => customer.last_name.trim(),
        };
        *counts.entry(name).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(name, count)| NameCount {
            name: name.to_string(),
            count,
            field,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(first: &str, last: &str) -> Customer {
        Customer::new(first, last, "1 3_My Address Street", "012346789")
    }

    #[test]
    fn test_group_and_sort_names() {
        let source = [
            customer("Alex", "Jones"),
            customer("Bobi", "Greeg"),
            customer("Alex", "Bobi"),
            customer("Simi", "Swart"),
            customer("Amii", "Blart"),
            customer("Amii", "Frank"),
            customer("Amii", "Jones"),
        ];

        let result = group_and_sort_by_name(&source);

        assert_eq!(
            result,
            vec![
                "Blart : 1",
                "Bobi : 1",
                "Bobi : 1",
                "Frank : 1",
                "Greeg : 1",
                "Simi : 1",
                "Swart : 1",
                "Alex : 2",
                "Jones : 2",
                "Amii : 3",
            ]
        );
    }

    #[test]
    fn test_first_and_last_names_grouped_separately() {
        let source = [customer("Bobi", "Greeg"), customer("Alex", "Bobi")];

        let entries = aggregate_names(&source);
        let bobi: Vec<_> = entries.iter().filter(|e| e.name == "Bobi").collect();

        assert_eq!(entries.len(), 4);
        assert_eq!(bobi.len(), 2);
        assert!(bobi.iter().any(|e| e.field == NameField::First));
        assert!(bobi.iter().any(|e| e.field == NameField::Last));
        assert_eq!(
            group_and_sort_by_name(&source),
            vec!["Alex : 1", "Bobi : 1", "Bobi : 1", "Greeg : 1"]
        );
    }

    #[test]
    fn test_empty_names() {
        let source = [
            customer("", "Greeg"),
            customer("  ", "Game"),
            customer("James", ""),
            customer("Alex", "Bobi"),
            customer("Alex", " "),
        ];

        let result = group_and_sort_by_name(&source);

        assert_eq!(
            result,
            vec![
                "Bobi : 1",
                "Game : 1",
                "Greeg : 1",
                "James : 1",
                " : 2",
                " : 2",
                "Alex : 2",
            ]
        );
    }

    #[test]
    fn test_names_are_trimmed_but_case_sensitive() {
        let source = [customer(" Alex", "x"), customer("Alex ", "y"), customer("alex", "z")];

        let entries = aggregate_names(&source);

        assert!(entries
            .iter()
            .any(|e| e.name == "Alex" && e.count == 2 && e.field == NameField::First));
        assert!(entries.iter().any(|e| e.name == "alex" && e.count == 1));
    }

    #[test]
    fn test_no_customers() {
        assert!(group_and_sort_by_name(&[]).is_empty());
    }
}
