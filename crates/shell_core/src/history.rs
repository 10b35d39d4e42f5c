/// Back stack of committed page URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationHistory {
    entries: Vec<String>,
    going_back: bool,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished page load. Reloads of the current page and the
    /// load that completes a back navigation do not add entries.
    pub fn commit(&mut self, url: &str) {
        if self.going_back {
            self.going_back = false;
            if self.current() != Some(url) {
                // Surface landed somewhere other than the expected entry.
                self.entries.pop();
                self.entries.push(url.to_string());
            }
            return;
        }
        if self.current() != Some(url) {
            self.entries.push(url.to_string());
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Pops the current entry if there is somewhere to go back to.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.entries.pop();
        self.going_back = true;
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
