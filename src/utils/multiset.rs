/// Remove each of `used` once from `sources`, keeping the order of what remains
pub fn unused_numbers(sources: &[i64], used: &[i64]) -> Vec<i64> {
    let mut remaining = sources.to_vec();
    for number in used {
        if let Some(pos) = remaining.iter().position(|n| n == number) {
            remaining.remove(pos);
        }
    }
    remaining
}
