const BOM_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_BE: [u8; 2] = [0xFE, 0xFF];

/// Decode UTF-16 text, honouring a byte order mark when present.
///
/// Without a BOM the bytes are read as little-endian.
pub fn decode_utf16(bytes: &[u8]) -> anyhow::Result<String> {
    let (big_endian, body) = if let Some(rest) = bytes.strip_prefix(&BOM_LE[..]) {
        (false, rest)
    } else if let Some(rest) = bytes.strip_prefix(&BOM_BE[..]) {
        (true, rest)
    } else {
        (false, bytes)
    };
    if body.len() % 2 != 0 {
        return Err(anyhow::anyhow!(
            "UTF-16 input has an odd number of bytes ({})", body.len()
        ));
    }
    let units = body.chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if big_endian { u16::from_be_bytes(pair) } else { u16::from_le_bytes(pair) }
        })
        .collect::<Vec<_>>();
    Ok(String::from_utf16(&units)?)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn encode_le(text: &str, with_bom: bool) -> Vec<u8> {
        let mut bytes = if with_bom { BOM_LE.to_vec() } else { Vec::new() };
        bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
        bytes
    }

    #[test]
    fn decodes_little_endian_with_bom() {
        let bytes = encode_le("http://x/a_250x250.jpg\r\n", true);
        assert_eq!(decode_utf16(&bytes).unwrap(), "http://x/a_250x250.jpg\r\n");
    }

    #[test]
    fn decodes_little_endian_without_bom() {
        let bytes = encode_le("é line", false);
        assert_eq!(decode_utf16(&bytes).unwrap(), "é line");
    }

    #[test]
    fn decodes_big_endian_with_bom() {
        let mut bytes = BOM_BE.to_vec();
        bytes.extend("abc".encode_utf16().flat_map(u16::to_be_bytes));
        assert_eq!(decode_utf16(&bytes).unwrap(), "abc");
    }

    #[test]
    fn rejects_odd_length_and_lone_surrogates() {
        assert!(decode_utf16(&[0xFF, 0xFE, 0x61]).is_err());
        assert!(decode_utf16(&0xD800u16.to_le_bytes()).is_err());
    }

    #[test]
    fn empty_input_is_empty_text() {
        assert_eq!(decode_utf16(&[]).unwrap(), "");
        assert_eq!(decode_utf16(&BOM_LE).unwrap(), "");
    }
}
