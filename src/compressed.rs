// compressed.rs - Variable-length interval stream codec.
//
// Interval boundary arrays are stored as cumulative first differences:
// a byte with the top bit clear carries a 7-bit delta, a 0b100xxxxx
// lead takes one payload byte (13 bits), a 0b101xxxxx lead takes two
// (21 bits). A stream with an odd number of values implies a final
// boundary at 0x110000. This is the on-disk shape of every property
// set embedded under src/tables/.

use crate::error::Error;
use crate::set::{CodepointSet, CODEPOINT_LIMIT};

/// Encode a set's boundary array as a compressed stream.
pub fn encode_intervals(set: &CodepointSet) -> Vec<u8> {
    let mut bounds: Vec<u32> = Vec::with_capacity(set.interval_count() * 2);
    for iv in set.by_interval() {
        bounds.push(iv.start);
        bounds.push(iv.end);
    }
    if bounds.last() == Some(&CODEPOINT_LIMIT) {
        bounds.pop();
    }
    let mut out = Vec::with_capacity(bounds.len() * 2);
    let mut prev = 0u32;
    for b in bounds {
        let d = b - prev;
        prev = b;
        debug_assert!(d < 1 << 21);
        if d < 0x80 {
            out.push(d as u8);
        } else if d < 0x2000 {
            out.push(0x80 | (d >> 8) as u8);
            out.push(d as u8);
        } else {
            out.push(0xA0 | (d >> 16) as u8);
            out.push((d >> 8) as u8);
            out.push(d as u8);
        }
    }
    out
}

/// Decode a compressed stream back into a set.
pub fn decode_intervals(data: &[u8]) -> Result<CodepointSet, Error> {
    let mut bounds: Vec<u32> = Vec::new();
    let mut acc = 0u32;
    let mut i = 0;
    while i < data.len() {
        let lead = data[i];
        let d = if lead & 0x80 == 0 {
            i += 1;
            u32::from(lead)
        } else if lead & 0xE0 == 0x80 {
            if i + 1 >= data.len() {
                return Err(Error::TruncatedTable);
            }
            let v = (u32::from(lead & 0x1F) << 8) | u32::from(data[i + 1]);
            i += 2;
            v
        } else if lead & 0xE0 == 0xA0 {
            if i + 2 >= data.len() {
                return Err(Error::TruncatedTable);
            }
            let v = (u32::from(lead & 0x1F) << 16)
                | (u32::from(data[i + 1]) << 8)
                | u32::from(data[i + 2]);
            i += 3;
            v
        } else {
            return Err(Error::TruncatedTable);
        };
        acc = acc.checked_add(d).ok_or(Error::TruncatedTable)?;
        if acc > CODEPOINT_LIMIT {
            return Err(Error::TruncatedTable);
        }
        bounds.push(acc);
    }
    if bounds.len() % 2 == 1 {
        bounds.push(CODEPOINT_LIMIT);
    }
    if !bounds.windows(2).all(|w| w[0] < w[1]) {
        return Err(Error::TruncatedTable);
    }
    Ok(CodepointSet::from_sorted_bounds(&bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivs(s: &CodepointSet) -> Vec<(u32, u32)> {
        s.by_interval().map(|iv| (iv.start, iv.end)).collect()
    }

    #[test]
    fn round_trip_mixed_deltas() {
        let set = CodepointSet::from_intervals(&[
            (0, 0x10),
            (0x7F, 0x80),
            (0x100, 0x2100),
            (0x10000, 0x10FFFF),
        ]);
        let bytes = encode_intervals(&set);
        assert_eq!(ivs(&decode_intervals(&bytes).unwrap()), ivs(&set));
    }

    #[test]
    fn trailing_limit_is_implicit() {
        let set = CodepointSet::from_intervals(&[(0x41, CODEPOINT_LIMIT)]);
        let bytes = encode_intervals(&set);
        // One boundary encodes in one byte; the end is implied.
        assert_eq!(bytes, [0x41]);
        assert_eq!(ivs(&decode_intervals(&bytes).unwrap()), ivs(&set));
    }

    #[test]
    fn empty_stream_is_empty_set() {
        assert!(decode_intervals(&[]).unwrap().is_empty());
        assert!(encode_intervals(&CodepointSet::new()).is_empty());
    }

    #[test]
    fn premature_end_is_reported() {
        assert_eq!(decode_intervals(&[0x85]), Err(Error::TruncatedTable));
        assert_eq!(decode_intervals(&[0xA1, 0x00]), Err(Error::TruncatedTable));
    }

    #[test]
    fn reserved_lead_byte_is_reported() {
        assert_eq!(decode_intervals(&[0xC0]), Err(Error::TruncatedTable));
        assert_eq!(decode_intervals(&[0xE5, 0, 0]), Err(Error::TruncatedTable));
    }

    #[test]
    fn thirteen_bit_form_boundary_values() {
        let set = CodepointSet::from_intervals(&[(0x80, 0x2080)]);
        let bytes = encode_intervals(&set);
        assert_eq!(bytes.len(), 2 + 3);
        assert_eq!(ivs(&decode_intervals(&bytes).unwrap()), ivs(&set));
    }
}
