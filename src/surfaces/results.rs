use crate::protocol::ResultItem;

/// Grid of result cards. Every update replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultGrid {
    visible: bool,
    items: Vec<ResultItem>,
}

impl ResultGrid {
    pub fn replace(&mut self, items: Vec<ResultItem>) {
        self.items = items;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_discards_previous_cards() {
        let mut grid = ResultGrid::default();
        grid.replace(vec![ResultItem::new("a", "1"), ResultItem::new("b", "2")]);
        assert_eq!(grid.items().len(), 2);

        grid.replace(vec![ResultItem::new("c", "3")]);
        assert_eq!(grid.items(), &[ResultItem::new("c", "3")]);
        assert!(grid.visible());

        grid.replace(Vec::new());
        assert!(grid.items().is_empty());
        assert!(grid.visible());
    }
}
