/// Unicode subscript digits, indexed by digit value.
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Convert every ASCII digit in `number` to its Unicode subscript form.
///
/// Anything that is not an ASCII digit is copied through untouched, so the
/// output always has the same number of characters as the input.
pub fn subscript(number: &str) -> String {
    number
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => SUBSCRIPT_DIGITS[d as usize],
            None => c,
        })
        .collect()
}
