use network::network::{HIDDEN_SIZE_1, OUTPUT_SIZE};
use network::PAYLOAD_WORDS;

/// All-zero parameters except for a final-layer row that wins every time.
pub fn payload_towards(k: usize) -> Vec<u32> {
    let mut words = vec![0u32; PAYLOAD_WORDS];
    let w2 = PAYLOAD_WORDS - OUTPUT_SIZE - OUTPUT_SIZE * HIDDEN_SIZE_1;
    for j in 0..HIDDEN_SIZE_1 {
        words[w2 + k * HIDDEN_SIZE_1 + j] = 1;
    }
    words[PAYLOAD_WORDS - OUTPUT_SIZE + k] = 1;
    words
}

/// Little-endian channel bytes for a run of words.
pub fn bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}
