//! Examples of using the tries
use token_trie::{AsciiReduxTrie, AsciiTrie, CodePoints, LinkedTrie, MapTrie, Token, TokenizeError};

fn main() {
    // A generic trie splitting on code points
    let mut trie = MapTrie::new(CodePoints);
    trie.insert("こんにちは").unwrap();
    trie.insert("hello").unwrap();

    assert!(trie.contains("こんにちは"));
    // contains is a prefix test, contains_word is exact
    assert!(trie.contains("hell"));
    assert!(!trie.contains_word("hell"));

    // Malformed input is reported with its offset
    match trie.insert(b"ok\xFF") {
        Ok(()) => unreachable!(),
        Err(err) => println!("{}", err),
    }

    // Any closure can act as a tokenizer; here, case-insensitive bytes
    let folded =
        |input: &[u8]| Ok::<_, TokenizeError>(Token::new(input[0].to_ascii_lowercase(), 1));
    let mut linked = LinkedTrie::new(folded);
    linked.insert("Rust").unwrap();
    assert!(linked.contains_word("rUST"));

    // The two byte tries agree, but differ in shape
    let mut direct = AsciiTrie::new();
    let mut redux = AsciiReduxTrie::new();
    for word in &["cat", "car", "dog"] {
        direct.insert(word).unwrap();
        redux.insert(word).unwrap();
    }
    assert_eq!(direct.contains("ca"), redux.contains("ca"));
    println!(
        "direct: {} nodes of 256 slots, redux: {} nodes of 16 slots",
        direct.node_count(),
        redux.node_count()
    );
}
