use std::collections::{BTreeMap, BTreeSet};

/// Grouped selection result: application path → selected task names
pub type Grouped = BTreeMap<String, BTreeSet<String>>;

/// Reduce raw selected values into task names grouped by application path.
///
/// Each value is either a bare application path (no colon, a no-op row that
/// is dropped) or `path:task[,task...]`. The split is on the FIRST colon only:
/// everything after it is the task segment, further colons included. An
/// empty task segment means the application's `default` task. Set semantics
/// de-duplicate names selected more than once for the same path.
///
/// This never fails; values that don't parse are discarded silently.
pub fn reduce_selections<I, S>(values: I) -> Grouped
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grouped = Grouped::new();
    for value in values {
        let Some((path, rest)) = value.as_ref().split_once(':') else {
            continue;
        };
        let names = grouped.entry(path.to_string()).or_default();
        if rest.is_empty() {
            names.insert("default".to_string());
            continue;
        }
        for name in rest.split(',') {
            if !name.is_empty() {
                names.insert(name.to_string());
            }
        }
    }
    grouped
}
