/// Splits text into tokens borrowed from the input.
pub trait Tokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a;
}

/// Splits on runs of whitespace; never yields empty tokens.
///
/// Whitespace is Unicode `White_Space` plus the ASCII information separators
/// U+001C..=U+001F.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(is_separator).filter(|token| !token.is_empty())
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
