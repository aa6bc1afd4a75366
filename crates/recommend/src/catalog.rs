//! Curated recommendation catalog

/// A candidate title in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub title: &'static str,
    pub author: &'static str,
}

const fn candidate(title: &'static str, author: &'static str) -> Candidate {
    Candidate { title, author }
}

/// Genre-keyed candidate table. Three to four titles per genre, covering the
/// same ten genres as the suggestion set.
const CATALOG: [(&str, &[Candidate]); 10] = [
    (
        "Fiction",
        &[
            candidate("The Kite Runner", "Khaled Hosseini"),
            candidate("To Kill a Mockingbird", "Harper Lee"),
            candidate("The Alchemist", "Paulo Coelho"),
        ],
    ),
    (
        "Non-Fiction",
        &[
            candidate("Sapiens", "Yuval Noah Harari"),
            candidate("Educated", "Tara Westover"),
            candidate("Thinking, Fast and Slow", "Daniel Kahneman"),
        ],
    ),
    (
        "Sci-Fi",
        &[
            candidate("Neuromancer", "William Gibson"),
            candidate("Snow Crash", "Neal Stephenson"),
            candidate("The Three-Body Problem", "Cixin Liu"),
            candidate("Ender's Game", "Orson Scott Card"),
        ],
    ),
    (
        "Fantasy",
        &[
            candidate("The Name of the Wind", "Patrick Rothfuss"),
            candidate("The Way of Kings", "Brandon Sanderson"),
            candidate("The Hobbit", "J.R.R. Tolkien"),
        ],
    ),
    (
        "Mystery",
        &[
            candidate("Gone Girl", "Gillian Flynn"),
            candidate("The Girl with the Dragon Tattoo", "Stieg Larsson"),
            candidate("The Da Vinci Code", "Dan Brown"),
        ],
    ),
    (
        "Classic",
        &[
            candidate("Pride and Prejudice", "Jane Austen"),
            candidate("Moby Dick", "Herman Melville"),
            candidate("Crime and Punishment", "Fyodor Dostoevsky"),
        ],
    ),
    (
        "Biography",
        &[
            candidate("Steve Jobs", "Walter Isaacson"),
            candidate("Becoming", "Michelle Obama"),
            candidate("Elon Musk", "Walter Isaacson"),
        ],
    ),
    (
        "Self-Help",
        &[
            candidate("The Power of Habit", "Charles Duhigg"),
            candidate("Deep Work", "Cal Newport"),
            candidate("Can't Hurt Me", "David Goggins"),
        ],
    ),
    (
        "Dystopian",
        &[
            candidate("Brave New World", "Aldous Huxley"),
            candidate("Fahrenheit 451", "Ray Bradbury"),
            candidate("The Handmaid's Tale", "Margaret Atwood"),
        ],
    ),
    (
        "History",
        &[
            candidate("Guns, Germs, and Steel", "Jared Diamond"),
            candidate("The Silk Roads", "Peter Frankopan"),
            candidate("A Short History of Nearly Everything", "Bill Bryson"),
        ],
    ),
];

/// Returns the curated candidates for a genre, empty for unknown genres
pub fn candidates_for(genre: &str) -> &'static [Candidate] {
    CATALOG
        .iter()
        .find(|(name, _)| *name == genre)
        .map(|(_, candidates)| *candidates)
        .unwrap_or(&[])
}
