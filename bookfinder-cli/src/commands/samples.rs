//! Sample queries command

/// Queries suggested on the home screen
pub const SAMPLE_QUERIES: [&str; 5] = [
    "The Great Gatsby",
    "Harry Potter",
    "To Kill a Mockingbird",
    "Pride and Prejudice",
    "The Catcher in the Rye",
];

/// Print the sample queries
pub fn samples() {
    println!("Try searching for:");
    for (i, sample) in SAMPLE_QUERIES.iter().enumerate() {
        println!("  {}. \"{}\"", i + 1, sample);
    }
}
