use crate::Row;

/// Replace every tab byte in every field with one space, in place.
/// Returns how many tabs were replaced.
pub fn scrub_tabs(rows: &mut [Row]) -> usize {
    let mut replaced = 0usize;
    for b in rows.iter_mut().flatten().flatten() {
        if *b == b'\t' {
            *b = b' ';
            replaced += 1;
        }
    }
    replaced
}
