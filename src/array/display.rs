/// Get a printable string for an array: elements joined by `", "`
pub fn array_to_string<S: AsRef<str>>(s: &[S]) -> String {
    s.iter()
        .map(|x| x.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}
