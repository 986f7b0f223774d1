use crate::bounded::BoundedArray;

/// The work phase: a gather through two dependent loads.
///
/// Iteration `j` reads an index from `index_source[j mod len]`, reads the byte at that
/// index in `value_source` and stores it at `destination[j]`. The address of the second
/// load is the value of the first one, so without speculating past the bounds checks the
/// core serialises both loads.
#[inline(never)]
pub fn run_work(
    index_source: &BoundedArray<u32>,
    value_source: &BoundedArray<u8>,
    destination: &mut BoundedArray<u8>,
    iterations: u32,
) {
    // An empty index source makes every index 0 anyway.
    let period = index_source.len().max(1);
    for j in 0..iterations {
        let index = index_source.get_word(j % period);
        destination.set_byte(j, value_source.get_byte(index));
    }
}
