//! Published test vectors for every algorithm, checked through the public API
//!
//! Vectors come from FIPS 180-4 / FIPS 202 example values and RFC 4231.

use cdigest_core::{
    AlgorithmId, DigestContext, compute_common, hmac, hmac_sha256, one_shot, xof::XofContext,
};
use hex_literal::hex;

const ABC: &[u8] = b"abc";
const TWO_BLOCK: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

#[test]
fn test_sha1_vectors() {
    assert_eq!(
        one_shot(AlgorithmId::Sha1, ABC).as_bytes(),
        hex!("a9993e364706816aba3e25717850c26c9cd0d89d")
    );
    assert_eq!(
        one_shot(AlgorithmId::Sha1, TWO_BLOCK).as_bytes(),
        hex!("84983e441c3bd26ebaae4aa1f95129e5e54670f1")
    );
}

#[test]
fn test_sha256_vectors() {
    assert_eq!(
        one_shot(AlgorithmId::Sha256, ABC).as_bytes(),
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
    assert_eq!(
        one_shot(AlgorithmId::Sha256, TWO_BLOCK).as_bytes(),
        hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1")
    );
}

#[test]
fn test_sha512_vectors() {
    assert_eq!(
        one_shot(AlgorithmId::Sha512, b"").as_bytes(),
        hex!(
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
            "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        )
    );
}

#[test]
fn test_sha3_vectors() {
    assert_eq!(
        one_shot(AlgorithmId::Sha3_256, ABC).as_bytes(),
        hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
    );
    assert_eq!(
        one_shot(AlgorithmId::Sha3_512, b"").as_bytes(),
        hex!(
            "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6"
            "15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
        )
    );
}

#[test]
fn test_million_a_through_incremental_updates() {
    let mut ctx = DigestContext::create(AlgorithmId::Sha1);
    let chunk = [b'a'; 1_000];
    for _ in 0..1_000 {
        ctx.update(chunk);
    }
    assert_eq!(
        ctx.finalize().as_bytes(),
        hex!("34aa973cd4c4daa4f61eeb2bdbad27316534016f")
    );
}

#[test]
fn test_common_bundle_vectors() {
    let digests = compute_common(ABC).unwrap();
    assert_eq!(digests.sha1(), hex!("a9993e364706816aba3e25717850c26c9cd0d89d"));
    assert_eq!(
        digests.sha256(),
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
}

#[test]
fn test_shake256_empty_vector() {
    let mut xof = XofContext::new();
    assert_eq!(
        xof.squeeze(64),
        hex!(
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
            "d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be"
        )
    );
}

#[test]
fn test_hmac_rfc4231_case_4() {
    let key = hex!("0102030405060708090a0b0c0d0e0f10111213141516171819");
    let data = [0xcd; 50];
    assert_eq!(
        hmac_sha256(&key, &data),
        hex!("82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b")
    );
}

#[test]
fn test_hmac_rfc4231_case_7_sha512() {
    let key = [0xaa; 131];
    let data = b"This is a test using a larger than block-size key and a larger than \
                 block-size data. The key needs to be hashed before being used by the \
                 HMAC algorithm.";
    assert_eq!(
        hmac(AlgorithmId::Sha512, &key, data).as_bytes(),
        hex!(
            "e37b6a775dc87dbaa4dfa9f96e5e3ffddebd71f8867289865df5a32d20cdc944"
            "b6022cac3c4982b10d5eeb55c3e4de15134676fb6de0446065c97440fa8c6a58"
        )
    );
}
