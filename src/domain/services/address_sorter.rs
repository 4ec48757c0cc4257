use crate::domain::model::Customer;

/// Street part of an address: everything from the first space onwards.
///
/// The key is taken from the untrimmed address, so a leading space is kept
/// and a leading space yields the whole address. Returns `None` when the
/// trimmed address is a single word or empty.
pub fn street_name_key(address: &str) -> Option<&str> {
    if !address.trim().contains(' ') {
        return None;
    }
    address.find(' ').map(|start| &address[start..])
}

/// Sorts customers by street name, dropping those without one.
pub fn sort_by_street_name(customers: &[Customer]) -> Vec<Customer> {
    let mut keyed: Vec<(&str, &Customer)> = customers
        .iter()
        .filter_map(|customer| street_name_key(&customer.address).map(|key| (key, customer)))
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(b.0));

    keyed.into_iter().map(|(_, customer)| customer.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(first: &str, address: &str) -> Customer {
        Customer::new(first, "Last", address, "012346789")
    }

    #[test]
    fn test_sort_by_street_name() {
        let source = [
            customer("Alex", "1 3_My Address Street"),
            customer("Bobi", " 2 2_My Address Street"),
            customer("Simi", ""),
            customer("Amii", "3 1_My Address Street"),
        ];

        let result = sort_by_street_name(&source);
        let addresses: Vec<&str> = result.iter().map(|c| c.address.as_str()).collect();

        assert_eq!(
            addresses,
            vec![
                "3 1_My Address Street",
                " 2 2_My Address Street",
                "1 3_My Address Street",
            ]
        );
        assert_eq!(result[0].first_name, "Amii");
    }

    #[test]
    fn test_street_name_key() {
        assert_eq!(street_name_key("3 1_My Address Street"), Some(" 1_My Address Street"));
        assert_eq!(street_name_key(" 2 2_My Address Street"), Some(" 2 2_My Address Street"));
        assert_eq!(street_name_key("Somewhere"), None);
        assert_eq!(street_name_key("  Somewhere  "), None);
        assert_eq!(street_name_key(""), None);
    }

    #[test]
    fn test_single_word_addresses_are_dropped() {
        let source = [customer("A", "Nowhere"), customer("B", "12 Baker Street")];

        let result = sort_by_street_name(&source);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].first_name, "B");
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let source = [
            customer("First", "1 Baker Street"),
            customer("Second", "2 Baker Street"),
            customer("Third", "3 Baker Street"),
        ];

        let result = sort_by_street_name(&source);
        let names: Vec<&str> = result.iter().map(|c| c.first_name.as_str()).collect();

        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_resorting_output_is_stable() {
        let source = [
            customer("A", "9 Zebra Road"),
            customer("B", "4 Apple Lane"),
            customer("C", "7 Mango Avenue"),
        ];

        let once = sort_by_street_name(&source);
        let twice = sort_by_street_name(&once);

        assert_eq!(once, twice);
    }
}
