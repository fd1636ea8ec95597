use crate::{
    entities::portfolio::{catalogue, Category, PortfolioResponse},
    errors::AppError,
};

pub struct PortfolioHandler {
    categories: Vec<Category>,
}

impl Default for PortfolioHandler {
    fn default() -> Self {
        PortfolioHandler { categories: catalogue() }
    }
}

impl PortfolioHandler {
    pub fn list(&self) -> PortfolioResponse {
        PortfolioResponse {
            categories: self.categories.clone(),
            total_works: self.categories.iter().map(|c| c.works.len()).sum(),
        }
    }

    pub fn category(&self, id: &str) -> Result<&Category, AppError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Portfolio category '{}'", id)))
    }
}

/// Expand/collapse state of the category list. At most one category is
/// open at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PortfolioAccordion {
    expanded: Option<String>,
}

impl PortfolioAccordion {
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_counts_every_work() {
        let handler = PortfolioHandler::default();
        let list = handler.list();
        assert_eq!(list.categories.len(), 3);
        assert_eq!(list.total_works, 6);
    }

    #[test]
    fn unknown_category_is_not_found() {
        let handler = PortfolioHandler::default();
        assert_eq!(handler.category("visual").unwrap().featured().count(), 2);
        assert!(matches!(handler.category("sculpture"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn accordion_keeps_one_category_open() {
        let mut accordion = PortfolioAccordion::default();
        accordion.toggle("written");
        assert_eq!(accordion.expanded(), Some("written"));

        accordion.toggle("spoken");
        assert!(accordion.is_expanded("spoken"));
        assert!(!accordion.is_expanded("written"));

        accordion.toggle("spoken");
        assert_eq!(accordion.expanded(), None);
    }
}
