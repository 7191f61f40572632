/// Ordered, duplicate-free list of class names on a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Flip membership of a class and return the new membership.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.remove(class) {
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for class in iter {
            let class = class.into();
            list.add(&class);
        }
        list
    }
}
