/// Builds a LIKE pattern matching any value that contains every
/// space-separated fragment of `term`, in order.
///
/// Wildcards and the escape character already in `term` are escaped first,
/// so user input only ever matches literally.
pub(crate) fn contains(term: &str, escape: char) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');

    for ch in term.chars() {
        match ch {
            ' ' => pattern.push('%'),
            '%' | '_' => {
                pattern.push(escape);
                pattern.push(ch);
            }
            ch if ch == escape => {
                pattern.push(escape);
                pattern.push(ch);
            }
            ch => pattern.push(ch),
        }
    }

    pattern.push('%');
    pattern
}
