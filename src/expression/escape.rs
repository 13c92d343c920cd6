/// Pure: Escape the dots in an assertion
///
/// Expression evaluators read `.` as member access, so variable names such
/// as `r.sub` must become `r_sub` before evaluation. No other character is
/// touched.
///
/// ```
/// use policy_util::expression::escape_assertion;
///
/// assert_eq!(escape_assertion("r.sub == p.sub"), "r_sub == p_sub");
/// assert_eq!(escape_assertion("no dots"), "no dots");
/// ```
pub fn escape_assertion(s: &str) -> String {
    s.replace('.', "_")
}
