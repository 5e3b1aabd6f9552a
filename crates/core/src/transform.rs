/// Half-reverse transform.
///
/// Even length: each half is reversed in place and the halves are joined.
/// Odd length: the full reversal followed by the original, so the output is
/// twice as long as the input.
///
/// Expects validated (ASCII) input; splitting is done on characters.
pub fn half_reverse(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();

    if len % 2 == 0 {
        let (first, second) = chars.split_at(len / 2);
        first.iter().rev().chain(second.iter().rev()).collect()
    } else {
        chars.iter().rev().chain(chars.iter()).collect()
    }
}
