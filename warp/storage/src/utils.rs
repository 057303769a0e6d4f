use {
    std::borrow::Cow,
    warp_types::{StdError, StdResult},
};

/// Combine a namespace and one or more keys into a full byte path.
///
/// The namespace and all keys other than the last one are prefixed with
/// their lengths (2 bytes big-endian), so that we know where a key ends and
/// where the next key starts:
///
/// ```plain
/// len(namespace) | namespace | len(key1) | key1 | len(key2) | key2 | key3
/// ```
pub fn nested_namespaces_with_key(
    maybe_namespace: Option<&[u8]>,
    prefixes: &[Cow<[u8]>],
    maybe_key: Option<&Cow<[u8]>>,
) -> Vec<u8> {
    let mut size = 0;
    if let Some(namespace) = maybe_namespace {
        size += namespace.len() + 2;
    }
    for prefix in prefixes {
        size += prefix.len() + 2;
    }
    if let Some(key) = maybe_key {
        size += key.len();
    }

    let mut out = Vec::with_capacity(size);
    if let Some(namespace) = maybe_namespace {
        out.extend_from_slice(&encode_length(namespace));
        out.extend_from_slice(namespace);
    }
    for prefix in prefixes {
        out.extend_from_slice(&encode_length(prefix));
        out.extend_from_slice(prefix);
    }
    if let Some(key) = maybe_key {
        out.extend_from_slice(key);
    }
    out
}

/// Encode the length of a byte slice as 2 bytes big-endian.
///
/// Panics if the slice is longer than `u16::MAX`. Keys in this workspace are
/// all fixed-size and short.
pub fn encode_length<B>(bytes: B) -> [u8; 2]
where
    B: AsRef<[u8]>,
{
    let len = bytes.as_ref().len();
    if len > 0xffff {
        panic!("can't encode length because byte slice is too long: {len} > {}", u16::MAX);
    }

    (len as u16).to_be_bytes()
}

/// Given a byte slice that is the first part of a key, return the smallest
/// byte slice that is greater than every key starting with it.
pub fn increment_last_byte(mut bytes: Vec<u8>) -> Vec<u8> {
    debug_assert!(
        bytes.iter().any(|x| *x != u8::MAX),
        "bytes are entirely 255"
    );
    for byte in bytes.iter_mut().rev() {
        if *byte == u8::MAX {
            *byte = 0;
        } else {
            *byte += 1;
            break;
        }
    }
    bytes
}

/// Return the smallest byte slice that is greater than the given one.
pub fn extend_one_byte(mut bytes: Vec<u8>) -> Vec<u8> {
    bytes.push(0);
    bytes
}

/// Given the raw bytes of a tuple key, split off the first element, which
/// is prefixed by its length.
pub fn split_first_key(bytes: &[u8]) -> StdResult<(&[u8], &[u8])> {
    let Some((len_bytes, rest)) = bytes.split_first_chunk::<2>() else {
        return Err(StdError::deserialize::<Vec<u8>, _>(
            "key",
            "missing length prefix",
        ));
    };

    let len = u16::from_be_bytes(*len_bytes) as usize;
    if rest.len() < len {
        return Err(StdError::length_mismatch(len, rest.len()));
    }

    Ok(rest.split_at(len))
}
