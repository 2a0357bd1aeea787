//! tests/kdf_tests.rs
//! PBKDF2-HMAC-SHA256 against published vectors

use hex::decode;
use notecrypt::aliases::PasswordString;
use notecrypt::consts::{KEY_LEN, PBKDF2_ITERATIONS};
use notecrypt::{derive_key, derive_secure_pbkdf2_key};

#[test]
fn pbkdf2_sha256_known_vectors() {
    let cases = [
        (
            "password",
            "salt",
            1u32,
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b",
        ),
        (
            "password",
            "salt",
            2,
            "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43",
        ),
        (
            "password",
            "salt",
            4096,
            "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a",
        ),
        // RFC 7914 §11
        (
            "passwd",
            "salt",
            1,
            "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
             49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783",
        ),
    ];

    for (password, salt, iterations, expected_hex) in cases {
        let expected = decode(expected_hex).unwrap();
        let password = PasswordString::new(password.to_string());

        let mut out = vec![0u8; expected.len()];
        derive_secure_pbkdf2_key(&password, salt.as_bytes(), iterations, &mut out).unwrap();
        assert_eq!(out, expected, "c={iterations}");
    }
}

#[test]
fn derive_key_uses_fixed_iteration_count() {
    let password = PasswordString::new("correct horse battery staple".to_string());
    let salt = [0x11u8; 16];

    let key = derive_key(&password, &salt, KEY_LEN).unwrap();
    assert_eq!(key.expose_secret().len(), KEY_LEN);

    let mut expected = [0u8; KEY_LEN];
    derive_secure_pbkdf2_key(&password, &salt, PBKDF2_ITERATIONS, &mut expected).unwrap();
    assert_eq!(key.expose_secret().as_slice(), &expected);
}

#[test]
fn different_salts_give_different_keys() {
    let password = PasswordString::new("hunter2".to_string());

    let mut a = [0u8; KEY_LEN];
    let mut b = [0u8; KEY_LEN];
    derive_secure_pbkdf2_key(&password, &[0xaa; 16], 10, &mut a).unwrap();
    derive_secure_pbkdf2_key(&password, &[0xbb; 16], 10, &mut b).unwrap();

    assert_ne!(a, b);
}
