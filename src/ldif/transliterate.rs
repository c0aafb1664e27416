/// Polish diacritics and their ASCII counterparts
const POLISH_MAP: [(char, char); 18] = [
    ('ą', 'a'), ('ć', 'c'), ('ę', 'e'), ('ł', 'l'), ('ń', 'n'),
    ('ó', 'o'), ('ś', 's'), ('ź', 'z'), ('ż', 'z'),
    ('Ą', 'A'), ('Ć', 'C'), ('Ę', 'E'), ('Ł', 'L'), ('Ń', 'N'),
    ('Ó', 'O'), ('Ś', 'S'), ('Ź', 'Z'), ('Ż', 'Z'),
];

/// Map one character, leaving anything outside the table untouched
pub fn transliterate_char(c: char) -> char {
    POLISH_MAP.iter()
        .find(|(accented, _)| *accented == c)
        .map_or(c, |(_, plain)| *plain)
}

/// Replace Polish accented characters with plain ASCII letters.
///
/// Only the 18 characters in the table are mapped. Other accented letters
/// (`ü`, `é`, ...) pass through unchanged, and the result always has the
/// same number of characters as the input.
pub fn transliterate(text: &str) -> String {
    text.chars().map(transliterate_char).collect()
}
