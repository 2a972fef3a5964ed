/// Join furniture labels into a lower-cased phrase.
///
/// `[]` gives `""`, `["Sofa"]` gives `"sofa"`, and longer lists are
/// comma-joined with `" and "` before the last label.
pub fn describe_furniture<S: AsRef<str>>(furniture_types: &[S]) -> String {
    let lowered: Vec<String> = furniture_types
        .iter()
        .map(|t| t.as_ref().to_lowercase())
        .collect();

    match lowered.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_empty_phrase() {
        let none: [&str; 0] = [];
        assert_eq!(describe_furniture(&none), "");
    }

    #[test]
    fn single_item_stands_alone() {
        assert_eq!(describe_furniture(&["Sofa"]), "sofa");
    }

    #[test]
    fn two_items_use_and() {
        assert_eq!(describe_furniture(&["Chair", "Stool"]), "chair and stool");
    }

    #[test]
    fn longer_lists_use_commas_then_and() {
        assert_eq!(
            describe_furniture(&["Sofa", "Loveseat", "Ottoman"]),
            "sofa, loveseat and ottoman"
        );
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(describe_furniture(&["Chair", "Chair"]), "chair and chair");
    }
}
