// Raw query string pairs in request order.
//
// A repeated key resolves to its first occurrence instead of failing the
// whole query.

pub type QueryPairs = Vec<(String, String)>;

pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
