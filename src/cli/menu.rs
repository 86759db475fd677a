//! Numbered main menu with number and keyword resolution.

use strsim::levenshtein;

const SUGGESTION_DISTANCE: usize = 3;

/// Actions reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateBudget,
    SelectBudget,
    EditBudget,
    DeleteBudget,
    AddExpense,
    ListBudgets,
    GetBalance,
    ListTransactions,
    GenerateChart,
    ExportCsv,
    ExportPdf,
    Exit,
}

struct MenuEntry {
    action: MenuAction,
    keyword: &'static str,
    description: &'static str,
}

/// Fixed table of menu entries, numbered from 1 in display order.
pub struct Menu {
    entries: Vec<MenuEntry>,
    max_keyword_len: usize,
}

impl Menu {
    pub fn new() -> Self {
        let entries = vec![
            MenuEntry {
                action: MenuAction::CreateBudget,
                keyword: "create",
                description: "Create a new budget",
            },
            MenuEntry {
                action: MenuAction::SelectBudget,
                keyword: "select",
                description: "Select a budget",
            },
            MenuEntry {
                action: MenuAction::EditBudget,
                keyword: "edit",
                description: "Edit a budget",
            },
            MenuEntry {
                action: MenuAction::DeleteBudget,
                keyword: "delete",
                description: "Delete a budget",
            },
            MenuEntry {
                action: MenuAction::AddExpense,
                keyword: "expense",
                description: "Add an expense to the selected budget",
            },
            MenuEntry {
                action: MenuAction::ListBudgets,
                keyword: "list",
                description: "List all budgets",
            },
            MenuEntry {
                action: MenuAction::GetBalance,
                keyword: "balance",
                description: "Show a budget balance",
            },
            MenuEntry {
                action: MenuAction::ListTransactions,
                keyword: "transactions",
                description: "List transactions of the selected budget",
            },
            MenuEntry {
                action: MenuAction::GenerateChart,
                keyword: "chart",
                description: "Generate a balance bar chart",
            },
            MenuEntry {
                action: MenuAction::ExportCsv,
                keyword: "csv",
                description: "Export balances to CSV",
            },
            MenuEntry {
                action: MenuAction::ExportPdf,
                keyword: "pdf",
                description: "Export balances to PDF",
            },
            MenuEntry {
                action: MenuAction::Exit,
                keyword: "exit",
                description: "Exit",
            },
        ];
        let max_keyword_len = entries
            .iter()
            .map(|entry| entry.keyword.len())
            .max()
            .unwrap_or(0);
        Self {
            entries,
            max_keyword_len,
        }
    }

    /// Rendered menu lines, numbered from 1.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                format!(
                    "{:>2}. {:<width$}  {}",
                    index + 1,
                    entry.keyword,
                    entry.description,
                    width = self.max_keyword_len
                )
            })
            .collect()
    }

    /// Resolves a menu number or action keyword to its action.
    pub fn resolve(&self, input: &str) -> Option<MenuAction> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(number) = trimmed.parse::<usize>() {
            return self
                .entries
                .get(number.checked_sub(1)?)
                .map(|entry| entry.action);
        }
        self.entries
            .iter()
            .find(|entry| entry.keyword.eq_ignore_ascii_case(trimmed))
            .map(|entry| entry.action)
    }

    /// Closest keyword within the suggestion distance, if any.
    pub fn closest_keyword(&self, input: &str) -> Option<&'static str> {
        let needle = input.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .map(|entry| (levenshtein(entry.keyword, &needle), entry.keyword))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .map(|(_, keyword)| keyword)
    }

    pub fn keywords(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.keyword).collect()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_numbers_and_keywords() {
        let menu = Menu::new();
        assert_eq!(menu.resolve("1"), Some(MenuAction::CreateBudget));
        assert_eq!(menu.resolve("12"), Some(MenuAction::Exit));
        assert_eq!(menu.resolve("csv"), Some(MenuAction::ExportCsv));
        assert_eq!(menu.resolve("EXIT"), Some(MenuAction::Exit));
        assert_eq!(menu.resolve("  7  "), Some(MenuAction::GetBalance));
    }

    #[test]
    fn rejects_unknown_choices() {
        let menu = Menu::new();
        assert_eq!(menu.resolve("0"), None);
        assert_eq!(menu.resolve("13"), None);
        assert_eq!(menu.resolve(""), None);
        assert_eq!(menu.resolve("budgetz!"), None);
    }

    #[test]
    fn suggests_near_misses() {
        let menu = Menu::new();
        assert_eq!(menu.closest_keyword("creat"), Some("create"));
        assert_eq!(menu.closest_keyword("transaction"), Some("transactions"));
        assert_eq!(menu.closest_keyword("zzzzzzzzzz"), None);
    }
}
