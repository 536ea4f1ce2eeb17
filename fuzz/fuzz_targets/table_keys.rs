use gmseedkey::{compute_key, enumerate_keys, parse_algorithm, parse_seed, AlgorithmIndex, ParameterTable, Seed};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                let _ = ParameterTable::parse(text);
                let _ = parse_seed(text);
                let _ = parse_algorithm(text);
            }
            if data.len() < 3 {
                return;
            }
            let seed = Seed(u16::from_be_bytes([data[0], data[1]]));
            let index = AlgorithmIndex(data[2] as usize);
            let table = ParameterTable::from_vec(data[3..].to_vec());
            let entries = enumerate_keys(seed, &table);
            if let Ok(key) = compute_key(seed, index, &table) {
                if index.value() > 0 {
                    assert_eq!(entries[index.value() - 1].1, key);
                }
            }
        });
    }
}
