use super::*;

/// A dynamic array searched front to back.
impl Container for Vec<String> {
    fn add(&mut self, value: String) {
        self.push(value);
    }

    fn contains(&self, value: &str) -> bool {
        self.iter().any(|item| item == value)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
