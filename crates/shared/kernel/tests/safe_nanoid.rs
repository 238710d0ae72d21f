use paw_kernel::{SAFE_ALPHABET, safe_nanoid, session_key};

#[test]
fn generates_expected_length_and_charset() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);

    for ch in id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in nanoid: {ch}");
    }
}

#[test]
fn custom_length() {
    let id = safe_nanoid!(20);
    assert_eq!(id.len(), 20);
}

#[test]
fn session_keys_are_long_and_unambiguous() {
    let key = session_key();
    assert_eq!(key.len(), 16);
    assert!(key.chars().all(|ch| SAFE_ALPHABET.contains(&ch)));
    assert_ne!(key, session_key());
}
