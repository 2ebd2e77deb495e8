// crates/csv2tsv-core/src/text_norm.rs
//
// Line ending normalization (byte-level).
//
// Rules, applied in this order over the whole buffer:
// - CR LF -> LF
// - LF CR -> LF
// - any CR left over -> LF
//
// The order matters: "\r\n\r" collapses to a single LF instead of two.

const CR: u8 = b'\r';
const LF: u8 = b'\n';

pub fn normalize_newlines(input: &[u8]) -> Vec<u8> {
    let pass1 = collapse_pair(input, CR, LF);
    let pass2 = collapse_pair(&pass1, LF, CR);
    pass2
        .into_iter()
        .map(|b| if b == CR { LF } else { b })
        .collect()
}

/// Replace every non-overlapping `first second` pair with a single LF,
/// scanning left to right.
fn collapse_pair(input: &[u8], first: u8, second: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0usize;
    while i < input.len() {
        let b = input[i];
        if b == first && i + 1 < input.len() && input[i + 1] == second {
            out.push(LF);
            i += 2;
            continue;
        }
        out.push(b);
        i += 1;
    }
    out
}
