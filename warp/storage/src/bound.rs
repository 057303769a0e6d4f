/// Bound of an iteration over a [`Map`](crate::Map) or [`Set`](crate::Set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound<T> {
    Inclusive(T),
    Exclusive(T),
}
