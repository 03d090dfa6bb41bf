/// Outcome of looking something up on disk.
///
/// Distinguishes "not there at all" from "there, but nothing in it", which
/// callers treat differently (report vs. skip).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The file or folder does not exist.
    Absent,
    /// It exists but holds no data.
    Empty,
    /// It exists and holds data.
    Found(T),
}
