//! End-to-end behaviour of the codec over real files and arbitrary input.

use std::io::Cursor;

use proptest::prelude::*;

use huffpack::{
    BitFileReader, BitStream, CodeTable, FrequencyTable, HuffError, HuffmanCodec, HuffmanTree,
    OpenMode,
};

#[test]
fn aaaabbbcc_file_is_bit_exact() {
    let dir  = tempfile::tempdir().unwrap();
    let src  = dir.path().join("data.txt");
    let huff = dir.path().join("data.txt.huff");
    let out  = dir.path().join("decodedOutput.txt");
    std::fs::write(&src, b"aaaabbbcc").unwrap();

    let codec = HuffmanCodec::from_file(&src).unwrap();
    assert_eq!(codec.table().get(b'a').unwrap().to_string(), "0");
    assert_eq!(codec.table().get(b'c').unwrap().to_string(), "10");
    assert_eq!(codec.table().get(b'b').unwrap().to_string(), "11");

    assert_eq!(codec.encode_file(&src, &huff).unwrap(), 14);
    assert_eq!(std::fs::read(&huff).unwrap(), vec![0, 0, 0, 14, 0b0000_1111, 0b1110_1000]);

    assert_eq!(codec.decode_file(&huff, &out).unwrap(), 9);
    assert_eq!(std::fs::read(&out).unwrap(), b"aaaabbbcc");
}

#[test]
fn single_symbol_roundtrip() {
    let codec  = HuffmanCodec::from_bytes(b"aaaaa").unwrap();
    let packed = codec.compress(b"aaaaa").unwrap();
    assert_eq!(packed, vec![0, 0, 0, 5, 0]);
    assert_eq!(codec.decompress(&packed).unwrap(), b"aaaaa");
}

#[test]
fn truncated_payload_is_corrupt_on_open() {
    let dir  = tempfile::tempdir().unwrap();
    let src  = dir.path().join("in.bin");
    let huff = dir.path().join("in.bin.huff");
    let data: Vec<u8> = b"abracadabra, said the wizard ".repeat(20);
    std::fs::write(&src, &data).unwrap();

    let codec = HuffmanCodec::from_bytes(&data).unwrap();
    codec.encode_file(&src, &huff).unwrap();

    let mut stored = std::fs::read(&huff).unwrap();
    stored.pop();
    std::fs::write(&huff, &stored).unwrap();

    assert!(matches!(
        BitStream::open(&huff, OpenMode::Read),
        Err(HuffError::CorruptInput(_))
    ));
    let out = dir.path().join("out.bin");
    assert!(matches!(codec.decode_file(&huff, &out), Err(HuffError::CorruptInput(_))));
}

#[test]
fn overlong_header_is_truncated_stream() {
    // Claim a 15th bit and set it to 1: the first half of a 'b' or 'c' code.
    let codec = HuffmanCodec::from_bytes(b"aaaabbbcc").unwrap();
    let mut packed = codec.compress(b"aaaabbbcc").unwrap();
    packed[3] = 15;
    packed[5] |= 0b0000_0010; // 15th bit = 1: starts a 'b'/'c' code
    assert!(matches!(codec.decompress(&packed), Err(HuffError::TruncatedStream(_))));
}

#[test]
fn single_symbol_session_rejects_foreign_stream() {
    let a = HuffmanCodec::from_bytes(b"hello world").unwrap();
    let b = HuffmanCodec::from_bytes(b"zzzzzzzzzzzzzzzzzzzzzzzz").unwrap();
    let packed = a.compress(b"hello world").unwrap();
    // The single-symbol alphabet only knows the code 0.
    assert!(matches!(b.decompress(&packed), Err(HuffError::CorruptInput(_))));
}

#[test]
fn reader_on_open_file_counts_bits_down() {
    let codec  = HuffmanCodec::from_bytes(b"mississippi").unwrap();
    let packed = codec.compress(b"mississippi").unwrap();
    let mut reader = BitFileReader::new(Cursor::new(packed)).unwrap();
    let declared = reader.declared_bits();
    assert_eq!(declared, codec.expected_bit_length());

    let mut read = 0;
    while reader.has_more_bits() {
        reader.read_bit().unwrap();
        read += 1;
    }
    assert_eq!(read, declared);
}

proptest! {
    #[test]
    fn roundtrip_any_input(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let codec  = HuffmanCodec::from_bytes(&data).unwrap();
        let packed = codec.compress(&data).unwrap();
        prop_assert_eq!(codec.decompress(&packed).unwrap(), data);
    }

    #[test]
    fn header_matches_bit_accounting(data in proptest::collection::vec(any::<u8>(), 1..2048)) {
        let freq  = FrequencyTable::analyze(&data);
        let tree  = HuffmanTree::build(&freq).unwrap();
        let table = CodeTable::from_tree(&tree);

        let expected: u64 = data.iter().map(|&s| table.get(s).unwrap().len() as u64).sum();
        prop_assert_eq!(table.encoded_bit_length(&freq), expected);

        let mut out = Cursor::new(Vec::new());
        let bits = huffpack::encoder::encode(&data, &table, &mut out).unwrap();
        let out  = out.into_inner();
        prop_assert_eq!(bits, expected);
        prop_assert_eq!(u32::from_be_bytes([out[0], out[1], out[2], out[3]]) as u64, expected);
        prop_assert_eq!(out.len() as u64, 4 + (expected + 7) / 8);
    }

    #[test]
    fn codes_are_prefix_free(data in proptest::collection::vec(any::<u8>(), 1..1024)) {
        let tree  = HuffmanTree::build(&FrequencyTable::analyze(&data)).unwrap();
        let table = CodeTable::from_tree(&tree);
        let codes: Vec<_> = table.iter().map(|(_, c)| *c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b));
                }
            }
        }
    }

    #[test]
    fn single_symbol_any_length(symbol in any::<u8>(), n in 1usize..500) {
        let data   = vec![symbol; n];
        let codec  = HuffmanCodec::from_bytes(&data).unwrap();
        let packed = codec.compress(&data).unwrap();
        prop_assert_eq!(u32::from_be_bytes([packed[0], packed[1], packed[2], packed[3]]) as usize, n);
        prop_assert_eq!(codec.decompress(&packed).unwrap(), data);
    }
}
