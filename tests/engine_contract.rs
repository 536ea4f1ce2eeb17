use gmseedkey::{
    compute_key, enumerate_keys, format_enumeration, AlgorithmIndex, ParameterTable, Seed,
    SeedKeyError, NO_ALGORITHMS, RECORD_SIZE,
};

/// Record 238: byte swap, add 0x1234, rotate left 3, subtract 0x0010.
const RECORD_238: [u8; RECORD_SIZE] = [
    238, 0x05, 0x00, 0x00, 0x14, 0x12, 0x34, 0x4C, 0x03, 0x00, 0xF8, 0x00, 0x10,
];

/// Record 1: complement (+1), swap-add, rotate right 4, subtract low/high.
const RECORD_1: [u8; RECORD_SIZE] = [
    1, 0x2A, 0x01, 0x02, 0x7E, 0x10, 0x20, 0x6B, 0x00, 0x04, 0x98, 0x01, 0x00,
];

fn filler_table(records: usize) -> Vec<u8> {
    let mut state = 0x2545_F491u32;
    (0..records * RECORD_SIZE)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}

fn pinned_table() -> ParameterTable {
    let mut data = filler_table(240);
    data[RECORD_SIZE..2 * RECORD_SIZE].copy_from_slice(&RECORD_1);
    data[238 * RECORD_SIZE..239 * RECORD_SIZE].copy_from_slice(&RECORD_238);
    ParameterTable::from_vec(data)
}

#[test]
fn seed_0102_algorithm_238_is_pinned() {
    let table = pinned_table();
    for _ in 0..3 {
        let key = compute_key(Seed(0x0102), AlgorithmIndex(238), &table).unwrap();
        assert_eq!(key.value(), 0xA198);
        assert_eq!(key.to_string(), "0xA198");
    }
}

#[test]
fn mixed_opcode_record_is_pinned() {
    let table = pinned_table();
    let key = compute_key(Seed(0x0102), AlgorithmIndex(1), &table).unwrap();
    assert_eq!(key.value(), 0xE1EF);
}

#[test]
fn index_zero_is_addressable_but_not_enumerated() {
    let table = pinned_table();
    assert!(compute_key(Seed(0x0102), AlgorithmIndex(0), &table).is_ok());
    let entries = enumerate_keys(Seed(0x0102), &table);
    assert_eq!(entries.first().map(|(i, _)| i.value()), Some(1));
}

#[test]
fn one_past_last_record_is_out_of_range() {
    let table = pinned_table();
    let limit = table.len() / RECORD_SIZE;
    assert!(compute_key(Seed(1), AlgorithmIndex(limit - 1), &table).is_ok());
    match compute_key(Seed(1), AlgorithmIndex(limit), &table) {
        Err(SeedKeyError::AlgorithmIndexOutOfRange { index, table_len }) => {
            assert_eq!(index, limit);
            assert_eq!(table_len, table.len());
        }
        other => panic!("expected out of range, got {other:?}"),
    }
}

#[test]
fn trailing_partial_record_is_never_addressed() {
    let mut data = filler_table(3);
    data.extend_from_slice(&[0x05; RECORD_SIZE - 1]);
    let table = ParameterTable::from_vec(data);
    assert_eq!(table.record_count(), 3);
    assert!(compute_key(Seed(0), AlgorithmIndex(3), &table).is_err());
    assert_eq!(enumerate_keys(Seed(0), &table).len(), 2);
}

#[test]
fn huge_index_fails_without_overflow() {
    let table = pinned_table();
    assert!(matches!(
        compute_key(Seed(0), AlgorithmIndex(usize::MAX / 2), &table),
        Err(SeedKeyError::AlgorithmIndexOutOfRange { .. })
    ));
}

#[test]
fn enumeration_matches_single_key_mode() {
    let table = pinned_table();
    let entries = enumerate_keys(Seed(0xBEEF), &table);
    assert_eq!(entries.len(), 239);
    for (index, key) in &entries {
        assert_eq!(compute_key(Seed(0xBEEF), *index, &table).unwrap(), *key);
    }
}

#[test]
fn short_tables_enumerate_to_placeholder() {
    for len in [0, 1, 12, 13, 25] {
        let table = ParameterTable::from_vec(vec![0x14; len]);
        let entries = enumerate_keys(Seed(0x0102), &table);
        assert!(entries.is_empty(), "len {len}");
        assert_eq!(format_enumeration(&entries), NO_ALGORITHMS);
    }
    let table = ParameterTable::from_vec(vec![0x00; 26]);
    let entries = enumerate_keys(Seed(0x0102), &table);
    assert_eq!(format_enumeration(&entries), "Algo 001: 0x0102");
}

#[test]
fn static_tables_work_like_loaded_ones() {
    static DATA: [u8; 26] = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        1, 0x05, 0, 0, 0x00, 0, 0, 0x00, 0, 0, 0x00, 0, 0,
    ];
    let table = ParameterTable::from_static(&DATA);
    let key = compute_key(Seed(0x1A00), AlgorithmIndex(1), &table).unwrap();
    assert_eq!(key.to_string(), "0x001A");
}
