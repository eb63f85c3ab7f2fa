//! Round-robin pool of outbound caller IDs.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A fixed set of caller numbers handed out in rotation.
///
/// The pool owns its cursor, so whoever owns the pool owns the rotation
/// state. Safe to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct NumberPool {
    numbers: Vec<String>,
    cursor: AtomicUsize,
}

impl NumberPool {
    /// Create a pool; blank entries are dropped.
    pub fn new(numbers: Vec<String>) -> Self {
        let numbers = numbers
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        Self {
            numbers,
            cursor: AtomicUsize::new(0),
        }
    }

    /// The next number in rotation, or `None` when the pool is empty.
    pub fn next(&self) -> Option<&str> {
        if self.numbers.is_empty() {
            return None;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.numbers.len();
        Some(&self.numbers[index])
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_rotates_in_order_and_wraps() {
        let pool = NumberPool::new(vec![
            "+15550000001".to_string(),
            "+15550000002".to_string(),
            "+15550000003".to_string(),
        ]);

        assert_eq!(pool.next(), Some("+15550000001"));
        assert_eq!(pool.next(), Some("+15550000002"));
        assert_eq!(pool.next(), Some("+15550000003"));
        assert_eq!(pool.next(), Some("+15550000001"));
    }

    #[test]
    fn test_empty_pool() {
        let pool = NumberPool::new(Vec::new());
        assert!(pool.is_empty());
        assert_eq!(pool.next(), None);
    }

    #[test]
    fn test_blank_entries_dropped() {
        let pool = NumberPool::new(vec!["  ".to_string(), " +15550000001 ".to_string()]);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.next(), Some("+15550000001"));
        assert_eq!(pool.next(), Some("+15550000001"));
    }

    #[test]
    fn test_fair_under_concurrent_use() {
        let pool = Arc::new(NumberPool::new(vec!["a".to_string(), "b".to_string()]));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pool = pool.clone();
                thread::spawn(move || {
                    (0..50)
                        .filter(|_| pool.next() == Some("a"))
                        .count()
                })
            })
            .collect();

        let a_count: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(a_count, 100);
    }
}
