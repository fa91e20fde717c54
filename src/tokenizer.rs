//! Defines the tokenizer capability that turns raw input into trie tokens.
//!
//! A tokenizer looks at the remaining input (a slice of bytes) and extracts a
//! single token from its front, reporting how many bytes it used up. The trie
//! walks call it repeatedly until the input is exhausted.
use std::fmt;
use std::hash::Hash;

/// One token extracted from the front of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<T> {
    /// The symbol used to branch at one trie level.
    pub value: T,
    /// How many bytes of input this token used up.
    pub consumed: usize,
}

impl<T> Token<T> {
    /// Creates a token consuming `consumed` bytes.
    pub fn new(value: T, consumed: usize) -> Self {
        Token { value, consumed }
    }
}

/// The next bytes of the input could not be decoded into a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeError {
    /// Human readable reason.
    pub cause: String,
    /// The remaining input the tokenizer was handed.
    pub input: Vec<u8>,
}

impl TokenizeError {
    /// Creates a tokenizer error for the given remaining input.
    pub fn new(cause: impl Into<String>, input: &[u8]) -> Self {
        TokenizeError {
            cause: cause.into(),
            input: input.to_vec(),
        }
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {:?}", self.cause, self.input)
    }
}

impl std::error::Error for TokenizeError {}

/// Extracts tokens from the front of a byte sequence.
///
/// Implementations must consume at least one byte whenever `input` is not
/// empty, otherwise a walk over the input would never finish. The walks
/// never call a tokenizer with empty input.
pub trait Tokenizer {
    /// The token type; it keys the children of a node.
    type Token: Clone + Hash + Eq;

    /// Extracts the first token of `input`.
    fn next_token(&self, input: &[u8]) -> Result<Token<Self::Token>, TokenizeError>;
}

impl<F, T> Tokenizer for F
where
    F: Fn(&[u8]) -> Result<Token<T>, TokenizeError>,
    T: Clone + Hash + Eq,
{
    type Token = T;

    fn next_token(&self, input: &[u8]) -> Result<Token<T>, TokenizeError> {
        self(input)
    }
}

/// Decodes one UTF-8 encoded code point per token.
///
/// Fails on malformed or truncated sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePoints;

impl Tokenizer for CodePoints {
    type Token = char;

    fn next_token(&self, input: &[u8]) -> Result<Token<char>, TokenizeError> {
        // A code point is at most 4 bytes long.
        let head = &input[..input.len().min(4)];
        let valid = match std::str::from_utf8(head) {
            Ok(s) => s,
            Err(e) => std::str::from_utf8(&head[..e.valid_up_to()]).unwrap_or_default(),
        };
        match valid.chars().next() {
            Some(c) => Ok(Token::new(c, c.len_utf8())),
            None => Err(TokenizeError::new("could not decode code point", input)),
        }
    }
}

/// One byte per token, never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bytes;

impl Tokenizer for Bytes {
    type Token = u8;

    fn next_token(&self, input: &[u8]) -> Result<Token<u8>, TokenizeError> {
        match input.first() {
            Some(&b) => Ok(Token::new(b, 1)),
            None => Err(TokenizeError::new("unexpected end of input", input)),
        }
    }
}
