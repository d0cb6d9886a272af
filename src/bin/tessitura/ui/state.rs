//! Selection state for the chart view

/// Cursor over the bars, wrapping at both ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Current bar, if there are any
    index: Option<usize>,
    /// Number of bars
    len: usize,
}

impl Selection {
    /// Start on the first of `len` bars
    pub fn new(len: usize) -> Self {
        Self {
            index: (len > 0).then_some(0),
            len,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Move right, wrapping to the first bar
    pub fn next(&mut self) {
        if let Some(index) = self.index.as_mut() {
            *index = (*index + 1) % self.len;
        }
    }

    /// Move left, wrapping to the last bar
    pub fn prev(&mut self) {
        if let Some(index) = self.index.as_mut() {
            *index = (*index + self.len - 1) % self.len;
        }
    }

    pub fn first(&mut self) {
        if self.index.is_some() {
            self.index = Some(0);
        }
    }

    pub fn last(&mut self) {
        if self.index.is_some() {
            self.index = Some(self.len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut selection = Selection::new(3);
        selection.prev();
        assert_eq!(selection.index(), Some(2));
        selection.next();
        assert_eq!(selection.index(), Some(0));
        selection.next();
        selection.next();
        assert_eq!(selection.index(), Some(2));
    }

    #[test]
    fn first_and_last() {
        let mut selection = Selection::new(15);
        selection.last();
        assert_eq!(selection.index(), Some(14));
        selection.first();
        assert_eq!(selection.index(), Some(0));
    }

    #[test]
    fn empty_has_no_selection() {
        let mut selection = Selection::new(0);
        selection.next();
        selection.prev();
        selection.last();
        assert_eq!(selection.index(), None);
    }
}
