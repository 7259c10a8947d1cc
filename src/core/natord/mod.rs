use std::cmp::Ordering;

/// Natural-order comparison of two text values.
///
/// Embedded runs of ASCII digits compare by numeric magnitude rather than
/// character by character, so "item9" orders before "item10". Everything
/// else compares bytewise by character code. The ordering is total:
/// equal-magnitude digit runs tie-break on fewer leading zeros, and a
/// string that is a prefix of the other orders first, so
/// `compare(a, a) == Equal` always holds.
pub fn compare(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0usize, 0usize);
    loop {
        match (a.get(i), b.get(j)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&x), Some(&y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(a, &mut i);
                    let run_b = take_digit_run(b, &mut j);
                    let ord = compare_runs(run_a, run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    if x != y {
                        return x.cmp(&y);
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
    }
}

/// Advance past the digit run starting at `*pos` and return it
fn take_digit_run<'a>(s: &'a [u8], pos: &mut usize) -> &'a [u8] {
    let start = *pos;
    while *pos < s.len() && s[*pos].is_ascii_digit() {
        *pos += 1;
    }
    &s[start..*pos]
}

/// Compare two digit runs by magnitude, then by leading-zero count
fn compare_runs(a: &[u8], b: &[u8]) -> Ordering {
    let sig_a = trim_leading_zeros(a);
    let sig_b = trim_leading_zeros(b);
    // more significant digits means strictly larger magnitude
    match sig_a.len().cmp(&sig_b.len()) {
        Ordering::Equal => match sig_a.cmp(sig_b) {
            // same magnitude: the run with fewer characters orders first
            Ordering::Equal => a.len().cmp(&b.len()),
            ord => ord,
        },
        ord => ord,
    }
}

fn trim_leading_zeros(run: &[u8]) -> &[u8] {
    let first = run.iter().position(|&d| d != b'0').unwrap_or(run.len());
    &run[first..]
}
