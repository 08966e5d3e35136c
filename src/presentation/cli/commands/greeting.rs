/// Greeting line for `quickstand hello`
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Capitalize each space-separated word and lowercase the rest
pub fn format_name(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
