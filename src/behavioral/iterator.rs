// Pattern: Iterator
// Sequential access without exposing the collection's layout.

use crate::transcript::Transcript;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberCollection {
    numbers: Vec<i32>,
}

impl NumberCollection {
    pub fn new(numbers: impl Into<Vec<i32>>) -> Self {
        Self {
            numbers: numbers.into(),
        }
    }

    pub fn iter(&self) -> NumberIterator<'_> {
        NumberIterator {
            numbers: &self.numbers,
            current: 0,
        }
    }
}

/// Cursor over a borrowed collection.
pub struct NumberIterator<'a> {
    numbers: &'a [i32],
    current: usize,
}

impl Iterator for NumberIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let value = *self.numbers.get(self.current)?;
        self.current += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.numbers.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NumberIterator<'_> {}

impl<'a> IntoIterator for &'a NumberCollection {
    type Item = i32;
    type IntoIter = NumberIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for NumberCollection {
    type Item = i32;
    type IntoIter = std::vec::IntoIter<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.into_iter()
    }
}

pub fn demo(out: &mut Transcript) {
    let collection = NumberCollection::new([10, 20, 30, 40]);
    for number in &collection {
        out.line(number.to_string());
    }

    let doubled: Vec<i32> = collection.iter().map(|n| n * 2).collect();
    out.line(format!("Doubled with adapters: {doubled:?}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_in_order() {
        let collection = NumberCollection::new([10, 20, 30, 40]);
        let seen: Vec<i32> = (&collection).into_iter().collect();
        assert_eq!(seen, vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_borrowed_iteration_can_repeat() {
        let collection = NumberCollection::new(vec![1, 2, 3]);
        assert_eq!(collection.iter().sum::<i32>(), 6);
        assert_eq!(collection.iter().len(), 3);
        assert_eq!(collection.into_iter().last(), Some(3));
    }

    #[test]
    fn test_empty_collection() {
        let collection = NumberCollection::default();
        assert_eq!(collection.iter().next(), None);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(&out.lines()[..4], ["10", "20", "30", "40"]);
        assert!(out.contains("[20, 40, 60, 80]"));
    }
}
